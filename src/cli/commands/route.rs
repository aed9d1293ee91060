use crate::cli::parser::Commands;
use crate::core::loader::load_trip_result;
use crate::core::viewport::{RouteViewport, ViewportCommand};
use crate::errors::AppResult;
use crate::models::location::GeoPoint;
use crate::ui::messages::{detail, header, info};

fn fmt_point(p: GeoPoint) -> String {
    format!("{:.4}, {:.4}", p.lat, p.lon)
}

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Route { input } = cmd {
        let trip = load_trip_result(input)?;
        let mut viewport = RouteViewport::new();

        header("Route");
        if !trip.route.is_empty() {
            println!("Stops   : {}", trip.route.join(" → "));
        }

        match viewport.update(trip.route_positions()) {
            Some(ViewportCommand::Recenter { bounds, padding }) => {
                println!("Points  : {}", viewport.positions().len());
                if let (Some(start), Some(end)) = (viewport.start(), viewport.end()) {
                    println!("Start   : {}", fmt_point(start));
                    println!("End     : {}", fmt_point(end));
                }
                println!("Center  : {}", fmt_point(viewport.center()));
                println!(
                    "Recenter: S {:.4} W {:.4} N {:.4} E {:.4} (padding {padding})",
                    bounds.south, bounds.west, bounds.north, bounds.east
                );
            }
            None => {
                info("No route positions in this result.");
                detail(format!("Default center: {}", fmt_point(viewport.center())));
            }
        }
    }

    Ok(())
}
