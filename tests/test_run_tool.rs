mod common;

use common::{seeded_api, TestBackend, TestPrompt};
use lib::directory::{
    api::Api,
    models::{
        discipline_model::TeachingKind, reference_model::ReferenceKind, Command, ProfessorFields,
    },
    nav::Route,
    run_tool::{render_route, run},
};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
async fn open_renders_the_page_behind_a_path() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(
        &api,
        &prompt,
        Command::Open {
            path: "/disciplines/1".to_owned(),
        },
    )
    .await;
    assert!(page.starts_with(" Преподаватели  | [Дисциплины] |  Справочники "));
    assert!(page.contains("Супрематизм"));
}

#[tokio::test]
async fn detail_path_without_id_falls_back_to_the_list() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = render_route(&api, &prompt, Route::DisciplineMissingId).await;
    assert!(page.contains("Результаты поиска: 2"));
    assert!(page.contains("[Дисциплины]"));
}

#[tokio::test]
async fn unknown_professor_path_lands_on_the_professor_list() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(
        &api,
        &prompt,
        Command::Open {
            path: "/professors/77".to_owned(),
        },
    )
    .await;
    assert!(page.contains("[Преподаватели]"));
    assert!(page.contains("Результаты поиска: 2"));
    assert_eq!(prompt.alerts(), vec!["Преподаватель не найден"]);
}

#[tokio::test]
async fn add_professor_refreshes_the_list() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(
        &api,
        &prompt,
        Command::AddProfessor(ProfessorFields {
            first_name: "Василий".to_owned(),
            last_name: "Кандинский".to_owned(),
            birth_date: "1866-12-16".to_owned(),
            email: "kandinsky@example.org".to_owned(),
            phone_number: "79990000003".to_owned(),
            office: "2".to_owned(),
            position: "2".to_owned(),
            work_time: "1".to_owned(),
            ..ProfessorFields::default()
        }),
    )
    .await;
    assert!(page.contains("Результаты поиска: 3"));
    assert!(page.contains("#100 Кандинский Василий"));
    assert_eq!(prompt.alerts(), vec!["Преподаватель успешно добавлен!"]);
}

#[tokio::test]
async fn rejected_professor_form_is_shown_again() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(
        &api,
        &prompt,
        Command::AddProfessor(ProfessorFields {
            first_name: "Василий".to_owned(),
            last_name: "Кандинский".to_owned(),
            birth_date: "1866-12-16".to_owned(),
            email: "kandinsky@example.org".to_owned(),
            phone_number: "79990000003".to_owned(),
            ..ProfessorFields::default()
        }),
    )
    .await;
    assert!(page.contains("Пожалуйста, выберите должность и ставку."));
    assert!(api.backend().mutations().is_empty());
}

#[tokio::test]
async fn attach_professor_with_types_from_the_command_line() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(
        &api,
        &prompt,
        Command::AttachProfessor {
            discipline: 2,
            professor: 1,
            kinds: vec![TeachingKind::Practices, TeachingKind::Labs],
        },
    )
    .await;
    assert_eq!(
        api.backend()
            .requests_to(Method::POST, "professor-disciplines/")
            .len(),
        2
    );
    assert!(page.contains("Малевич Казимир Северинович"));
    assert!(!page.contains("Нет практиков"));
    assert!(!page.contains("Нет лаборантов"));
}

#[tokio::test]
async fn remove_discipline_ends_on_the_discipline_list() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(&api, &prompt, Command::RemoveDiscipline { id: 2 }).await;
    assert!(page.contains("Результаты поиска: 1"));
    assert!(!page.contains("Поп-арт"));
}

#[tokio::test]
async fn new_discipline_opens_its_page() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(
        &api,
        &prompt,
        Command::AddDiscipline {
            name: "Кубизм".to_owned(),
        },
    )
    .await;
    assert!(page.contains("Кубизм"));
    assert!(page.contains("Нет лекторов"));
}

#[tokio::test]
async fn edit_reference_from_the_command_line() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(
        &api,
        &prompt,
        Command::EditReference {
            kind: ReferenceKind::Offices,
            id: 2,
            value: "305".to_owned(),
        },
    )
    .await;
    assert!(page.contains("[2] 305"));
    assert!(!page.contains("[2] 202"));
}

#[tokio::test]
async fn references_can_be_collapsed() {
    let api = seeded_api();
    let prompt = TestPrompt::yes();

    let page = run(
        &api,
        &prompt,
        Command::References {
            collapse: vec![ReferenceKind::Offices],
        },
    )
    .await;
    assert!(page.contains("▸ Кабинеты"));
    assert!(!page.contains("101"));
}

#[tokio::test]
async fn reference_changes_wait_for_a_loaded_page() {
    let backend = TestBackend::seeded();
    backend.fail(Method::GET, "positions/", 500, json!({}));
    let api = Api::new(backend);
    let prompt = TestPrompt::yes();

    for command in [
        Command::AddReference {
            kind: ReferenceKind::Degrees,
            value: "Магистр".to_owned(),
        },
        Command::EditReference {
            kind: ReferenceKind::Offices,
            id: 1,
            value: "305".to_owned(),
        },
        Command::RemoveReference {
            kind: ReferenceKind::Activities,
            id: 1,
        },
    ] {
        let page = run(&api, &prompt, command).await;
        assert!(page.contains("Не удалось загрузить справочники"));
    }
    assert!(api.backend().mutations().is_empty());
    assert!(prompt.alerts().is_empty());
    assert!(prompt.confirms().is_empty());
}
