use aurinko::app::App;
use aurinko::chart::render;
use aurinko::error::Error;
use aurinko::scenes::yield_year;
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("building yearly yield figure");
    let app = App::new(yield_year::Params::default(), yield_year::figure)?;
    render::save(app.figure(), "bounce/yield_year.html", "Average yield over the year.")?;
    info!("figure written");
    Ok(())
}
