//! Route table. Protected routes go through [`ProtectedRoute`]; their
//! patterns mirror `shipdesk::paths`, which the page registry is validated
//! against at startup.

mod error;
mod home;
mod login;
mod shipment;
mod shipments;
mod tracking;

pub(crate) use error::ErrorPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use shipment::ShipmentPage;
pub(crate) use shipments::ShipmentsListPage;
pub(crate) use tracking::TrackingPage;

use crate::features::access::ProtectedRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;
use shipdesk::paths;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <ErrorPage /> }>
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/shipment/:waybill_number") view=ShipmentRoute />
            <Route path=path!("/shipment/:waybill_number/track") view=TrackingPage />
            <Route path=path!("/shipments") view=ShipmentsRoute />
            <Route path=path!("/") view=HomeRoute />
        </Routes>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    view! {
        <ProtectedRoute route=paths::ROOT>
            <HomePage />
        </ProtectedRoute>
    }
}

#[component]
fn ShipmentsRoute() -> impl IntoView {
    view! {
        <ProtectedRoute route=paths::SHIPMENTS>
            <ShipmentsListPage />
        </ProtectedRoute>
    }
}

#[component]
fn ShipmentRoute() -> impl IntoView {
    view! {
        <ProtectedRoute route=paths::SHIPMENT>
            <ShipmentPage />
        </ProtectedRoute>
    }
}
