use color_eyre::Result;
use log::info;
use queen_strategy::{
    board::Position,
    config::DemoConfig,
    context::MovementContext,
    strategies::{self, Strategy},
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let config = DemoConfig::from_env()?;

    let mut picker = match config.seed {
        Some(seed) => {
            info!("using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut context =
        MovementContext::new(strategies::ALL[0], StdRng::from_rng(&mut picker)?)
            .narrating(config.narrate);

    let mut position = Position::ORIGIN;
    info!("moving the queen {} times from {position}", config.moves);

    for _ in 0..config.moves {
        // the client doesn't care which rule it gets, so pick one blindly
        if let Some(&strategy) = strategies::ALL.choose(&mut picker) {
            context.set_strategy(strategy);
        }
        position = context.perform_move(position);
    }

    info!(
        "finished on {position} using {}",
        context.strategy().name()
    );

    Ok(())
}
