pub mod terminal;

use crate::config::Config;
use crate::console::Console;
use crate::overlay;

/// Startup text: what the birds are and how to drive them. Defaults are
/// quoted from `config`.
pub fn print_help(console: &mut impl Console, config: &Config) {
    let lines = [
        "Evolution of birds with a neural network and a genetic algorithm.".to_string(),
        String::new(),
        "---- About ----".into(),
        String::new(),
        "Each triangle is a bird. Every bird sees through the arc drawn around it".into(),
        "and has a brain that decides where and how fast to fly.".into(),
        String::new(),
        "Each circle is food the birds try to find and eat.".into(),
        String::new(),
        format!(
            "Brains start out random. After {} steps the birds that ate the most",
            config.sim_generation_length
        ),
        "breed the next generation, which gets better at finding food.".into(),
        String::new(),
        "Commands (type them in the field below):".into(),
        String::new(),
        "- p / pause".into(),
        "  Pauses or resumes the simulation.".into(),
        String::new(),
        format!(
            "- r / reset [animals={}] [f={}] [...]",
            config.world_animals, config.world_foods
        ),
        "  Restarts the simulation with optional parameters:".into(),
        String::new(),
        format!("  * a / animals (default={})", config.world_animals),
        "    number of birds".into(),
        String::new(),
        format!("  * f / foods (default={})", config.world_foods),
        "    number of foods".into(),
        String::new(),
        format!("  * n / neurons (default={})", config.brain_neurons),
        "    brain neurons per bird".into(),
        String::new(),
        format!("  * p / photoreceptors (default={})", config.eye_cells),
        "    eye cells per bird".into(),
        String::new(),
        "  * i:<field>=INT / f:<field>=FLOAT".into(),
        format!(
            "    any field: {}",
            overlay::field_names().collect::<Vec<_>>().join(", ")
        ),
        String::new(),
        "  Examples:".into(),
        "    reset animals=100 foods=100".into(),
        "    r a=100 f=100".into(),
        "    r p=3".into(),
        "    r f:eye_fov_range=0.5".into(),
        String::new(),
        "- t / train [generations]".into(),
        "  Fast-forwards one or more generations so you can".into(),
        "  quickly see the result of training.".into(),
        String::new(),
        "  Examples:".into(),
        "    train".into(),
        "    t 5".into(),
        String::new(),
        "----".into(),
    ];

    for line in &lines {
        console.println(line);
    }
}
