//! BDD step definitions for the health and info pollers

use cucumber::gherkin::Step;
use cucumber::{then, when};

use crate::world::DashWorld;

#[when("the dashboard loads")]
async fn dashboard_loads(world: &mut DashWorld) {
    world.dashboard().start().await;
}

#[when("the health button is pressed")]
async fn health_pressed(world: &mut DashWorld) {
    world.dashboard().on_health_clicked().await;
}

#[when("the info button is pressed")]
async fn info_pressed(world: &mut DashWorld) {
    world.dashboard().on_info_clicked().await;
}

#[then(expr = "the health badge reads {string}")]
fn health_badge_reads(world: &mut DashWorld, expected: String) {
    assert_eq!(world.dashboard().view().snapshot().health_badge, expected);
}

#[then(expr = "the health panel reads {string}")]
fn health_panel_reads(world: &mut DashWorld, expected: String) {
    assert_eq!(world.dashboard().view().snapshot().health_out, expected);
}

#[then("the health panel shows:")]
fn health_panel_shows(world: &mut DashWorld, step: &Step) {
    let expected = step.docstring.as_ref().expect("docstring required");
    assert_eq!(
        world.dashboard().view().snapshot().health_out,
        expected.trim()
    );
}

#[then("the health panel shows the pretty-printed health report")]
fn health_panel_pretty(world: &mut DashWorld) {
    let health_out = world.dashboard().view().snapshot().health_out;
    assert!(
        health_out.starts_with("{\n  \"ok\": true,\n  \"status\": \"ok\",\n  \"ts_ms\": "),
        "unexpected health panel:\n{}",
        health_out
    );
}

#[then(expr = "the info panel shows chip id {string}")]
fn info_panel_chip_id(world: &mut DashWorld, chip_id: String) {
    let info_out = world.dashboard().view().snapshot().info_out;
    let expected = format!("\"chip_id\": \"{}\"", chip_id);
    assert!(
        info_out.contains(&expected),
        "Expected info panel to contain '{}'.\nInfo panel:\n{}",
        expected,
        info_out
    );
}

#[then(expr = "the info panel reads {string}")]
fn info_panel_reads(world: &mut DashWorld, expected: String) {
    assert_eq!(world.dashboard().view().snapshot().info_out, expected);
}
