use log::{info, warn};

use super::{
    api::Api,
    backend::Backend,
    models::{discipline_model::TeachingKind, Command},
    nav::Route,
    prompt::Prompt,
    views::{
        add_discipline::AddDiscipline,
        add_professor::{AddProfessor, Submitted},
        assign::{AssignForm, TeachingSelection},
        discipline_detail::DisciplineDetail,
        discipline_list::DisciplineList,
        professor_detail::ProfessorDetail,
        professor_list::ProfessorList,
        references::ReferencesPage,
        Loaded, Outcome,
    },
};

/* a detail page redirecting to a list never redirects again, this only guards against surprises */
const MAX_REDIRECTS: usize = 4;

fn assign_form(counterpart: u32, kinds: &[TeachingKind]) -> AssignForm {
    AssignForm {
        counterpart: Some(counterpart),
        kinds: TeachingSelection::of(kinds),
    }
}

/// Renders the page behind a route, following redirects.
pub async fn render_route<B: Backend, P: Prompt>(api: &Api<B>, prompt: &P, route: Route) -> String {
    let mut route = route;
    for _ in 0..MAX_REDIRECTS {
        info!("Opening {}", route);
        let loaded = match route {
            Route::Professors => {
                let mut list = ProfessorList::default();
                list.load(api).await;
                return list.render();
            }
            Route::Disciplines => {
                let mut list = DisciplineList::default();
                list.load(api).await;
                return list.render();
            }
            Route::References => {
                let mut page = ReferencesPage::default();
                page.load(api).await;
                return page.render();
            }
            Route::Professor(id) => match ProfessorDetail::load(api, prompt, Some(id)).await {
                Loaded::View(view) => return view.render(),
                Loaded::Redirect(to) => to,
            },
            Route::ProfessorMissingId => match ProfessorDetail::load(api, prompt, None).await {
                Loaded::View(view) => return view.render(),
                Loaded::Redirect(to) => to,
            },
            Route::Discipline(id) => match DisciplineDetail::load(api, Some(id)).await {
                Loaded::View(view) => return view.render(),
                Loaded::Redirect(to) => to,
            },
            Route::DisciplineMissingId => match DisciplineDetail::load(api, None).await {
                Loaded::View(view) => return view.render(),
                Loaded::Redirect(to) => to,
            },
        };
        route = loaded;
    }
    warn!("Too many redirects, stopped at {}", route);
    format!("Слишком много перенаправлений: {}", route)
}

async fn after<B: Backend, P: Prompt>(
    api: &Api<B>,
    prompt: &P,
    outcome: Outcome,
    current: Route,
) -> String {
    match outcome {
        Outcome::Navigate(route) => render_route(api, prompt, route).await,
        Outcome::Stay => render_route(api, prompt, current).await,
    }
}

/// Performs one screen or action and returns the page the user ends up on.
pub async fn run<B: Backend, P: Prompt>(api: &Api<B>, prompt: &P, command: Command) -> String {
    match command {
        Command::Open { path } => match Route::parse(&path) {
            Some(route) => render_route(api, prompt, route).await,
            None => {
                prompt.alert(&format!("Страница {} не найдена", path));
                render_route(api, prompt, Route::Professors).await
            }
        },
        Command::Professors { search } => {
            let mut list = ProfessorList::default();
            list.load(api).await;
            list.set_search(&search);
            list.render()
        }
        Command::AddProfessor(fields) => {
            let mut list = ProfessorList::default();
            list.open_add_form();
            let mut form = AddProfessor::new();
            form.load_options(api).await;
            form.fields = fields;
            match form.submit(api).await {
                Submitted::Created(_) => {
                    prompt.alert(&form.message);
                    list.on_created(api).await;
                    list.render()
                }
                Submitted::Rejected => form.render(),
            }
        }
        Command::RemoveProfessor { id } => {
            match ProfessorDetail::load(api, prompt, Some(id)).await {
                Loaded::View(view) => {
                    let outcome = view.remove_professor(api, prompt).await;
                    after(api, prompt, outcome, Route::Professor(id)).await
                }
                Loaded::Redirect(to) => render_route(api, prompt, to).await,
            }
        }
        Command::AttachDiscipline {
            professor,
            discipline,
            kinds,
        } => match ProfessorDetail::load(api, prompt, Some(professor)).await {
            Loaded::View(mut view) => {
                *view.open_form() = assign_form(discipline, &kinds);
                view.add_discipline(api, prompt).await;
                view.render()
            }
            Loaded::Redirect(to) => render_route(api, prompt, to).await,
        },
        Command::DetachDiscipline { professor, record } => {
            match ProfessorDetail::load(api, prompt, Some(professor)).await {
                Loaded::View(mut view) => {
                    view.remove_discipline(api, prompt, record).await;
                    view.render()
                }
                Loaded::Redirect(to) => render_route(api, prompt, to).await,
            }
        }
        Command::Disciplines { search } => {
            let mut list = DisciplineList::default();
            list.load(api).await;
            list.set_search(&search);
            list.render()
        }
        Command::AddDiscipline { name } => {
            let mut form = AddDiscipline::new(&name);
            match form.submit(api).await {
                Outcome::Navigate(route) => render_route(api, prompt, route).await,
                Outcome::Stay => {
                    let message = form.error.unwrap_or_default();
                    prompt.alert(&message);
                    render_route(api, prompt, Route::Disciplines).await
                }
            }
        }
        Command::RemoveDiscipline { id } => match DisciplineDetail::load(api, Some(id)).await {
            Loaded::View(view) => {
                let outcome = view.remove_discipline(api, prompt).await;
                after(api, prompt, outcome, Route::Discipline(id)).await
            }
            Loaded::Redirect(to) => render_route(api, prompt, to).await,
        },
        Command::AttachProfessor {
            discipline,
            professor,
            kinds,
        } => match DisciplineDetail::load(api, Some(discipline)).await {
            Loaded::View(mut view) => {
                *view.open_form() = assign_form(professor, &kinds);
                view.add_professor(api, prompt).await;
                view.render()
            }
            Loaded::Redirect(to) => render_route(api, prompt, to).await,
        },
        Command::DetachProfessor { discipline, record } => {
            match DisciplineDetail::load(api, Some(discipline)).await {
                Loaded::View(mut view) => {
                    view.remove_professor(api, prompt, record).await;
                    view.render()
                }
                Loaded::Redirect(to) => render_route(api, prompt, to).await,
            }
        }
        Command::References { collapse } => {
            let mut page = ReferencesPage::default();
            page.load(api).await;
            for kind in collapse {
                page.section_mut(kind).toggle();
            }
            page.render()
        }
        Command::AddReference { kind, value } => {
            let mut page = ReferencesPage::default();
            page.load(api).await;
            if page.error.is_some() {
                return page.render();
            }
            let section = page.section_mut(kind);
            section.begin_add();
            section.set_new_value(&value);
            section.save_new(api, prompt).await;
            page.render()
        }
        Command::EditReference { kind, id, value } => {
            let mut page = ReferencesPage::default();
            page.load(api).await;
            if page.error.is_some() {
                return page.render();
            }
            let section = page.section_mut(kind);
            section.begin_edit(id);
            section.set_edit_value(&value);
            section.save_edit(api, prompt).await;
            page.render()
        }
        Command::RemoveReference { kind, id } => {
            let mut page = ReferencesPage::default();
            page.load(api).await;
            if page.error.is_some() {
                return page.render();
            }
            page.section_mut(kind).remove(api, prompt, id).await;
            page.render()
        }
    }
}
