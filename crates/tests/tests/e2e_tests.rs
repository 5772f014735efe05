#[path = "e2e/confidence_walk.rs"]
mod confidence_walk;

#[path = "e2e/budget_stops.rs"]
mod budget_stops;

#[path = "e2e/saturation.rs"]
mod saturation;

#[path = "e2e/batch_independence.rs"]
mod batch_independence;
