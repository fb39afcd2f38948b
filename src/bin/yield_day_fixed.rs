use aurinko::app::App;
use aurinko::chart::render;
use aurinko::error::Error;
use aurinko::scenes::sweep_fixed;
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("building fixed tilt sweep figure");
    let app = App::new(sweep_fixed::Params::default(), sweep_fixed::figure)?;
    render::save(
        app.figure(),
        "bounce/yield_day_fixed_panel_norot.html",
        "Average Yield over a day for fixed panel.",
    )?;
    info!("figure written");
    Ok(())
}
