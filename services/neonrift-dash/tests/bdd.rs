//! BDD test entry point for the neonrift dashboard

#[path = "bdd/world.rs"]
mod world;

#[path = "bdd/steps/mod.rs"]
mod steps;

use cucumber::World as _;
use world::DashWorld;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    DashWorld::run("tests/features").await;
}
