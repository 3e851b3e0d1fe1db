//! BDD step definitions for the auto-refresh toggle

use std::time::Duration;

use cucumber::{given, then, when};

use crate::world::DashWorld;

#[given(expr = "an auto refresh interval of {int} ms")]
fn auto_refresh_interval(world: &mut DashWorld, interval_ms: u64) {
    world.interval_ms = Some(interval_ms);
}

#[given("a dashboard for the device")]
fn dashboard_for_device(world: &mut DashWorld) {
    world.dashboard();
}

#[when("the auto refresh button is pressed")]
async fn auto_pressed(world: &mut DashWorld) {
    world.dashboard().on_auto_clicked().await;
}

#[when("auto refresh is turned on")]
async fn auto_on(world: &mut DashWorld) {
    world.dashboard().set_auto_refresh(true).await;
}

#[when("auto refresh is turned off")]
async fn auto_off(world: &mut DashWorld) {
    world.dashboard().set_auto_refresh(false).await;
}

#[then("auto refresh is off")]
async fn auto_is_off(world: &mut DashWorld) {
    let dashboard = world.dashboard();
    assert!(!dashboard.is_auto_refresh_enabled().await);
    assert_eq!(dashboard.view().snapshot().auto_label, "Auto refresh: off");
}

#[then(expr = "the auto refresh button reads {string}")]
fn auto_button_reads(world: &mut DashWorld, expected: String) {
    assert_eq!(world.dashboard().view().snapshot().auto_label, expected);
}

#[then(expr = "the auto refresh note reads {string}")]
fn auto_note_reads(world: &mut DashWorld, expected: String) {
    assert_eq!(world.dashboard().view().snapshot().auto_note, expected);
}

#[then("the auto refresh button is dimmed")]
fn auto_button_dimmed(world: &mut DashWorld) {
    assert!(world.dashboard().view().snapshot().auto_inactive);
}

#[then("the auto refresh button is not dimmed")]
fn auto_button_not_dimmed(world: &mut DashWorld) {
    assert!(!world.dashboard().view().snapshot().auto_inactive);
}

#[then("no auto refresh timer is running")]
async fn no_timer(world: &mut DashWorld) {
    assert!(!world.dashboard().has_auto_refresh_timer().await);
}

#[then("exactly one auto refresh timer is running")]
async fn one_timer(world: &mut DashWorld) {
    assert!(world.dashboard().has_auto_refresh_timer().await);
}

#[then(expr = "after {int} ms the device has served {int} info request(s)")]
async fn after_delay_info_requests(world: &mut DashWorld, delay_ms: u64, expected: u64) {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    assert_eq!(world.device().state.info_requests(), expected);
}
