use aurinko::app::App;
use aurinko::chart::render;
use aurinko::error::Error;
use aurinko::scenes::yield_fixed;
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("building fixed panel yield figure");
    let app = App::new(yield_fixed::Params::default(), yield_fixed::figure)?;
    render::save(
        app.figure(),
        "bounce/yield_fixed_tilt.html",
        "Yield for a fixed solar panel facing south.",
    )?;
    info!("figure written");
    Ok(())
}
