use aurinko::app::App;
use aurinko::chart::render;
use aurinko::error::Error;
use aurinko::scenes::elevation;
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("building sun elevation figure");
    let app = App::new(elevation::Params::default(), elevation::figure)?;
    render::save(
        app.figure(),
        "bounce/sun_elevation_over_the_day.html",
        "Sun angle = f(day, lat).",
    )?;
    info!("figure written");
    Ok(())
}
