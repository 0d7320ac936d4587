use crate::console::Console;
use crate::renderer::{self, Canvas};
use crate::session::Session;

/// One display frame: advance the simulation if it is running, report a
/// finished generation, then redraw from fresh world state. The driver calls
/// this once per available frame, paused or not.
pub fn tick(session: &mut Session, console: &mut impl Console, canvas: &mut impl Canvas) {
    if session.is_running() {
        if let Some(stats) = session.simulation_mut().step() {
            console.println(&stats.to_string());
        }
    }

    let sim = session.simulation();
    renderer::draw_world(sim.config(), sim.world(), canvas);
}
