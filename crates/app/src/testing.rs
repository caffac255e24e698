//! In-memory fakes for the ports, shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use backup_console_domain::activity::Activity;
use backup_console_domain::backup::Backup;
use backup_console_domain::credentials::Field;
use backup_console_domain::error::ConsoleError;
use backup_console_domain::stats::DashboardStats;

use crate::ports::{
    ApiRequest, ApiResponse, Banner, BusyAction, DashboardView, HttpTransport, LoginStep,
    LoginView, Method, PageHost, Route,
};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FakeNetworkError(String);

#[derive(Default)]
struct TransportState {
    responses: HashMap<(Method, String), ApiResponse>,
    failure: Option<String>,
    requests: Vec<ApiRequest>,
}

/// Transport answering from a script keyed by method and URL.
///
/// Unscripted requests answer 404 with an empty body.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<RefCell<TransportState>>,
}

impl FakeTransport {
    pub fn respond(&self, method: Method, url: &str, status: u16, body: &str) {
        self.state.borrow_mut().responses.insert(
            (method, url.to_string()),
            ApiResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn fail_with(&self, message: &str) {
        self.state.borrow_mut().failure = Some(message.to_string());
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

impl HttpTransport for FakeTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ConsoleError>> {
        let mut state = self.state.borrow_mut();
        let key = (request.method, request.url.clone());
        state.requests.push(request);
        let result = match &state.failure {
            Some(message) => Err(ConsoleError::transport(FakeNetworkError(message.clone()))),
            None => Ok(state.responses.get(&key).cloned().unwrap_or(ApiResponse {
                status: 404,
                body: String::new(),
            })),
        };
        std::future::ready(result)
    }
}

#[derive(Default)]
struct PageState {
    navigations: Vec<Route>,
    prompts: Vec<String>,
    sleeps: Vec<Duration>,
}

/// Page that records navigations, prompts and sleeps. Sleeps resolve at once.
#[derive(Clone)]
pub struct RecordingPage {
    state: Rc<RefCell<PageState>>,
    confirm_answer: Rc<Cell<bool>>,
    visible: Rc<Cell<bool>>,
}

impl Default for RecordingPage {
    fn default() -> Self {
        Self {
            state: Rc::default(),
            confirm_answer: Rc::new(Cell::new(true)),
            visible: Rc::new(Cell::new(true)),
        }
    }
}

impl RecordingPage {
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.state.borrow().navigations.clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.state.borrow().prompts.clone()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.state.borrow().sleeps.clone()
    }
}

impl PageHost for RecordingPage {
    fn navigate(&self, route: Route) {
        self.state.borrow_mut().navigations.push(route);
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.state.borrow_mut().prompts.push(prompt.to_string());
        self.confirm_answer.get()
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.state.borrow_mut().sleeps.push(duration);
        std::future::ready(())
    }
}

/// What a recording view was last told to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Step(LoginStep),
    Error(String, Vec<Field>),
    Success(String),
    Cleared,
    Loading(bool),
    User(String, String, String),
    Backups(Vec<Backup>),
    Activities(Vec<Activity>),
    Stats(DashboardStats),
    Banner(Banner),
    FormMessage(Banner),
    FormCleared,
    FormClosed,
    BackupsVisible(bool),
    Busy(BusyAction, bool),
}

/// View that records every call, for both pages.
#[derive(Clone, Default)]
pub struct RecordingView {
    events: Rc<RefCell<Vec<Shown>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<Shown> {
        self.events.borrow().clone()
    }

    pub fn reset(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, shown: Shown) {
        self.events.borrow_mut().push(shown);
    }

    pub fn banners(&self) -> Vec<Banner> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::Banner(banner) => Some(banner),
                _ => None,
            })
            .collect()
    }

    pub fn form_messages(&self) -> Vec<Banner> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::FormMessage(banner) => Some(banner),
                _ => None,
            })
            .collect()
    }

    pub fn last_backups(&self) -> Option<Vec<Backup>> {
        self.events().into_iter().rev().find_map(|e| match e {
            Shown::Backups(backups) => Some(backups),
            _ => None,
        })
    }

    pub fn last_activities(&self) -> Option<Vec<Activity>> {
        self.events().into_iter().rev().find_map(|e| match e {
            Shown::Activities(feed) => Some(feed),
            _ => None,
        })
    }

    pub fn last_stats(&self) -> Option<DashboardStats> {
        self.events().into_iter().rev().find_map(|e| match e {
            Shown::Stats(stats) => Some(stats),
            _ => None,
        })
    }

    pub fn last_error(&self) -> Option<(String, Vec<Field>)> {
        self.events().into_iter().rev().find_map(|e| match e {
            Shown::Error(message, fields) => Some((message, fields)),
            _ => None,
        })
    }

    pub fn last_success(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|e| match e {
            Shown::Success(message) => Some(message),
            _ => None,
        })
    }

    pub fn last_step(&self) -> Option<LoginStep> {
        self.events().into_iter().rev().find_map(|e| match e {
            Shown::Step(step) => Some(step),
            _ => None,
        })
    }
}

impl LoginView for RecordingView {
    fn show_step(&self, step: LoginStep) {
        self.push(Shown::Step(step));
    }

    fn show_error(&self, message: &str, fields: &[Field]) {
        self.push(Shown::Error(message.to_string(), fields.to_vec()));
    }

    fn show_success(&self, message: &str) {
        self.push(Shown::Success(message.to_string()));
    }

    fn clear_messages(&self) {
        self.push(Shown::Cleared);
    }

    fn set_loading(&self, loading: bool) {
        self.push(Shown::Loading(loading));
    }
}

impl DashboardView for RecordingView {
    fn show_user(&self, display_name: &str, avatar: &str, status: &str) {
        self.push(Shown::User(
            display_name.to_string(),
            avatar.to_string(),
            status.to_string(),
        ));
    }

    fn show_backups(&self, backups: &[Backup]) {
        self.push(Shown::Backups(backups.to_vec()));
    }

    fn show_activities(&self, activities: &[Activity]) {
        self.push(Shown::Activities(activities.to_vec()));
    }

    fn show_stats(&self, stats: &DashboardStats) {
        self.push(Shown::Stats(stats.clone()));
    }

    fn show_banner(&self, banner: Banner) {
        self.push(Shown::Banner(banner));
    }

    fn show_form_message(&self, banner: Banner) {
        self.push(Shown::FormMessage(banner));
    }

    fn clear_form_messages(&self) {
        self.push(Shown::FormCleared);
    }

    fn close_create_form(&self) {
        self.push(Shown::FormClosed);
    }

    fn set_backups_visible(&self, visible: bool) {
        self.push(Shown::BackupsVisible(visible));
    }

    fn set_busy(&self, action: BusyAction, busy: bool) {
        self.push(Shown::Busy(action, busy));
    }
}
