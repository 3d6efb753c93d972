use dioxus::prelude::*;

use api::Role;
use ui::SessionProvider;
use views::{
    AdminDashboard, ChvDashboard, ClinicDashboard, Home, Login, PatientDashboard, Register,
};

mod guard;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/patient-dashboard")]
    PatientDashboard {},
    #[route("/clinic-dashboard")]
    ClinicDashboard {},
    #[route("/admin-dashboard")]
    AdminDashboard {},
    #[route("/chv-dashboard")]
    ChvDashboard {},
}

impl Route {
    /// Landing route for a role, mirroring [`Role::landing_path`].
    fn landing(role: Role) -> Self {
        match role {
            Role::Patient => Route::PatientDashboard {},
            Role::Clinic => Route::ClinicDashboard {},
            Role::Admin => Route::AdminDashboard {},
            Role::Chv => Route::ChvDashboard {},
            Role::Unknown => Route::Home {},
        }
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}
