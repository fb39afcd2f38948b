use aurinko::app::App;
use aurinko::chart::render;
use aurinko::error::Error;
use aurinko::scenes::shade_tree;
use log::info;

fn main() -> Result<(), Error> {
    pretty_env_logger::init_timed();
    info!("building tree shade figure");
    let app = App::new(shade_tree::Params::default(), shade_tree::figure)?;
    render::save(
        app.figure(),
        "bounce/shade_tree_over_the_house.html",
        "Tree shade on the house.",
    )?;
    info!("figure written");
    Ok(())
}
