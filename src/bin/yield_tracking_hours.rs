use aurinko::app::App;
use aurinko::chart::render;
use aurinko::error::Error;
use aurinko::scenes::yield_tracking;
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("building tracking panel yield figure");
    let app = App::new(yield_tracking::Params::default(), yield_tracking::figure)?;
    render::save(
        app.figure(),
        "bounce/yield_rotative_fixed_tilt.html",
        "Rotative solar panel yield.",
    )?;
    info!("figure written");
    Ok(())
}
