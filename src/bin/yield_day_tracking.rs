use aurinko::app::App;
use aurinko::chart::render;
use aurinko::error::Error;
use aurinko::scenes::sweep_tracking;
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("building tracking tilt sweep figure");
    let app = App::new(sweep_tracking::Params::default(), sweep_tracking::figure)?;
    render::save(
        app.figure(),
        "bounce/sun_yield_day_fixed_panel.html",
        "Average Yield over a day.",
    )?;
    info!("figure written");
    Ok(())
}
