//! Body Information Tool
//!
//! Prints the position, next rise and set, and physical ephemeris of a body
//! for an observer.
//!
//! Usage:
//!   cargo run --bin body_info -- mars --date 2003-06-14T15:26:00 --lat 55.925 --lon -3.1825
//!
//! Set `RUST_LOG=debug` to see the rise/set solver at work.

use clap::{ArgAction, Parser};
use serde::Serialize;

use planetfield::constants::RAD2DEG;
use planetfield::coordinates::{Equatorial, Galactic};
use planetfield::framelib::inertial::InertialFrame;
use planetfield::{
    AlmanacError, Ephemeris, GeodeticLocation, Instant, Observer, PhysicalEphemeris, Planet,
    PlanetfieldError, RiseSet, SunProvider,
};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Body Information Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Position, rise/set and physical ephemeris of the Sun, a planet or Pluto",
    long_about = None
)]
struct Args {
    /// Body name (Sun, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto)
    planet: String,

    /// UT instant in ISO-8601 form; defaults to now
    #[arg(short, long)]
    date: Option<String>,

    /// Geodetic latitude in degrees, north positive
    #[arg(long, default_value_t = 55.925, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in degrees, east positive
    #[arg(long, default_value_t = -3.1825, allow_hyphen_values = true)]
    lon: f64,

    /// Height above the ellipsoid in metres
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,

    /// Altitude in degrees that counts as rising or setting
    #[arg(long, default_value_t = -0.8333, allow_hyphen_values = true)]
    target_elevation: f64,

    /// Print a JSON report instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    body: &'static str,
    instant: String,
    jd: f64,
    jde: f64,
    light_time_days: f64,
    ra_hours: f64,
    dec_degrees: f64,
    distance_au: f64,
    galactic_longitude: f64,
    galactic_latitude: f64,
    b1950_ra_hours: f64,
    b1950_dec_degrees: f64,
    altitude: f64,
    azimuth: f64,
    next_rise: Option<String>,
    next_set: Option<String>,
    physics: PhysicalEphemeris,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:<24}{}", format!("{}:", name), value);
}

/// Formats a rise/set search result, treating circumpolar as an answer
fn describe_event(result: &std::result::Result<Instant, AlmanacError>) -> Option<String> {
    match result {
        Ok(instant) => Some(instant.to_string()),
        Err(AlmanacError::Circumpolar { .. }) => None,
    }
}

fn build_report(planet: Planet, args: &Args, instant: Instant) -> Result<Report> {
    let ephemeris = Ephemeris::new();
    let frames = ephemeris.frames();
    let observer = Observer::new(
        instant,
        GeodeticLocation::new(args.lat, args.lon, args.elevation),
    );

    let mut body = ephemeris.body(planet);
    let physics = ephemeris.physics(&mut body, instant);
    let geo = body.geocentric();

    let j2000 = Equatorial::from_cartesian(geo.vector());
    let galactic = Galactic::from_cartesian(frames.j2000_to_galactic(geo.vector()));
    let b1950 = Equatorial::from_cartesian(frames.j2000_to_b1950(geo.vector()));

    let topo = frames.topocentric(&geo, &observer);
    let horizontal = frames.horizontal(&topo, &observer);

    let rise = ephemeris.next_rise_set(&body, &observer, args.target_elevation, RiseSet::Rise);
    let set = ephemeris.next_rise_set(&body, &observer, args.target_elevation, RiseSet::Set);

    Ok(Report {
        body: planet.name(),
        instant: instant.to_string(),
        jd: instant.jd(),
        jde: instant.jde(),
        light_time_days: body.light_time(),
        ra_hours: j2000.ra_hours(),
        dec_degrees: j2000.dec_degrees(),
        distance_au: geo.distance(),
        galactic_longitude: galactic.lon * RAD2DEG,
        galactic_latitude: galactic.lat * RAD2DEG,
        b1950_ra_hours: b1950.ra_hours(),
        b1950_dec_degrees: b1950.dec_degrees(),
        altitude: horizontal.altitude_degrees(),
        azimuth: horizontal.azimuth_degrees(),
        next_rise: describe_event(&rise),
        next_set: describe_event(&set),
        physics,
    })
}

fn display_report(report: &Report, sun_distance: f64) {
    println!("{} at {}", report.body, report.instant);
    println!("-------------------------------------------------------");
    print_named_value("JD (UT)", format!("{:.6}", report.jd));
    print_named_value("JDE (TT)", format!("{:.6}", report.jde));

    print_section_header("Geocentric J2000");
    print_named_value("Right ascension", format!("{:.6} h", report.ra_hours));
    print_named_value("Declination", format!("{:.5}°", report.dec_degrees));
    print_named_value("Distance", format!("{:.7} AU", report.distance_au));
    print_named_value("Light time", format!("{:.3} min", -report.light_time_days * 1440.0));
    print_named_value("Sun distance", format!("{:.7} AU", sun_distance));

    print_section_header("Other frames");
    print_named_value(
        "Galactic l, b",
        format!("{:.4}°, {:.4}°", report.galactic_longitude, report.galactic_latitude),
    );
    print_named_value(
        "B1950 RA, Dec",
        format!("{:.6} h, {:.5}°", report.b1950_ra_hours, report.b1950_dec_degrees),
    );

    print_section_header("Observer");
    print_named_value("Altitude", format!("{:.5}°", report.altitude));
    print_named_value("Azimuth", format!("{:.5}°", report.azimuth));
    print_named_value(
        "Next rise",
        report.next_rise.as_deref().unwrap_or("circumpolar"),
    );
    print_named_value("Next set", report.next_set.as_deref().unwrap_or("circumpolar"));

    let physics = &report.physics;
    print_section_header("Physical ephemeris");
    print_named_value("Magnitude", format!("{:.2}", physics.magnitude));
    print_named_value("Diameter", format!("{:.2}\"", physics.angular_diameter_arcsec()));
    print_named_value("Elongation", format!("{:.3}°", physics.elongation * RAD2DEG));
    print_named_value("Phase angle", format!("{:.3}°", physics.phase_angle * RAD2DEG));
    print_named_value("Illuminated", format!("{:.4}", physics.illuminated_fraction));
    print_named_value("Earth declination", format!("{:.3}°", physics.axis_inclination * RAD2DEG));
    print_named_value("Pole position angle", format!("{:.3}°", physics.position_angle * RAD2DEG));
    for (system, cm) in ["I", "II", "III"].iter().zip(physics.central_meridian) {
        if let Some(cm) = cm {
            print_named_value(&format!("Central meridian {}", system), format!("{:.3}°", cm));
        }
    }
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .try_init();

    let args = Args::parse();

    let planet: Planet = args.planet.parse().map_err(PlanetfieldError::from)?;
    let instant = match &args.date {
        Some(text) => Instant::parse(text).map_err(PlanetfieldError::from)?,
        None => Instant::now(),
    };

    let report = build_report(planet, &args, instant)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let sun_distance = Ephemeris::new().sun_position(&instant).distance();
        display_report(&report, sun_distance);
    }

    Ok(())
}
