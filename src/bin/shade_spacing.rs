use aurinko::app::App;
use aurinko::chart::render;
use aurinko::error::Error;
use aurinko::scenes::shade_spacing;
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("building panel spacing figure");
    let app = App::new(shade_spacing::Params::default(), shade_spacing::figure)?;
    render::save(
        app.figure(),
        "bounce/shade_solar_panel_spacing.html",
        "Shade of a solar panel given panel and sun angles.",
    )?;
    info!("figure written");
    Ok(())
}
