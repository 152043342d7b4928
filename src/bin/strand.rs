use clap::*;

use strand_bsdf::core::config::*;
use strand_bsdf::core::error::Result;
use strand_bsdf::core::pbrt::*;
use strand_bsdf::core::registry::MaterialRegistry;
use strand_bsdf::materials::create_hair_material;

use rayon::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use log::*;

/// Monte Carlo albedo estimator for a single material.
///
/// Places the material on a fiber whose tangent is `+x` and whose normal is
/// `+z`, then for a sweep of outgoing elevations reports the importance
/// sampled estimate of the directional albedo next to a uniform-sphere one.
#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Material library (JSON).
    #[arg(short, long, value_name = "filename")]
    pub library: Option<PathBuf>,

    /// Material to measure; defaults to the last one in the library.
    #[arg(short, long, value_name = "name")]
    pub material: Option<String>,

    /// Directions sampled per outgoing angle.
    #[arg(short, long, default_value = "100000", value_name = "num")]
    pub samples: usize,

    /// Number of outgoing angles between -90 and 90 degrees.
    #[arg(short, long, default_value = "7", value_name = "num")]
    pub angles: usize,

    /// Hair absorption used when no library is given (0 is a white furnace).
    #[arg(long = "sigma-a", default_value = "0", value_name = "value")]
    pub sigma_a: Float,

    /// Hair longitudinal roughness used when no library is given.
    #[arg(long = "beta-m", default_value = "0.3", value_name = "value")]
    pub beta_m: Float,

    /// Hair azimuthal roughness used when no library is given.
    #[arg(long = "beta-n", default_value = "0.3", value_name = "value")]
    pub beta_n: Float,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn select_material(opts: &CommandOptions) -> Result<(String, Arc<dyn Material>)> {
    if let Some(path) = opts.library.as_ref() {
        let lib = LibraryDescription::load(path)?;
        let registry = MaterialRegistry::from_library(&lib)?;
        let name = match opts.material.as_ref() {
            Some(name) => name.clone(),
            None => registry
                .names()
                .last()
                .cloned()
                .ok_or_else(|| ScatterError::UnknownMaterial(String::from("<empty library>")))?,
        };
        let material = registry.lookup(&name)?;
        return Ok((name, material));
    }

    let desc = HairDescription {
        sigma_a: Some(SpectrumValue::from(opts.sigma_a)),
        beta_m: opts.beta_m,
        beta_n: opts.beta_n,
        ..HairDescription::default()
    };
    let name = String::from("hair");
    let material = create_hair_material(&name, &desc)?;
    return Ok((name, material));
}

struct Estimate {
    theta_o: Float,
    importance: Spectrum,
    uniform: Spectrum,
    rejected: usize,
}

fn estimate(material: &dyn Material, theta_o: Float, samples: usize, seq: u64) -> Result<Estimate> {
    let wo = Vector3f::new(Float::sin(theta_o), 0.0, Float::cos(theta_o));
    let si = SurfaceInteraction::new(
        &Point3f::zero(),
        &Point2f::new(0.5, 0.5),
        &wo,
        &Vector3f::new(1.0, 0.0, 0.0),
        &Normal3f::new(0.0, 0.0, 1.0),
    );
    let bsdf = material.compute_scattering_functions(&si)?;

    let mut rng = RNG::new_sequence(seq);
    let mut importance = Spectrum::zero();
    let mut uniform = Spectrum::zero();
    let mut rejected = 0;
    for _ in 0..samples {
        let sample = BsdfSample::from_source(&mut rng);
        match bsdf.sample_f(&wo, &sample, BSDF_ALL) {
            Some((f, wi, pdf, _)) => {
                importance += f * (Vector3f::abs_dot(&wi, &bsdf.ns) / pdf);
            }
            None => rejected += 1,
        }

        let wi = uniform_sample_sphere(&sample.u2());
        let f = bsdf.f(&wo, &wi, BSDF_ALL);
        uniform += f * (Vector3f::abs_dot(&wi, &bsdf.ns) / uniform_sphere_pdf());
    }
    let inv = 1.0 / samples.max(1) as Float;
    return Ok(Estimate {
        theta_o,
        importance: importance * inv,
        uniform: uniform * inv,
        rejected,
    });
}

fn run(opts: &CommandOptions) -> Result<()> {
    let (name, material) = select_material(opts)?;
    info!("Measuring \"{}\": {}", name, material.to_string());

    let n = opts.angles.max(1);
    let angles: Vec<Float> = (0..n)
        .map(|i| {
            if n == 1 {
                0.0
            } else {
                // stay off the poles
                -89.0 + 178.0 * i as Float / (n - 1) as Float
            }
        })
        .collect();

    let results: Vec<Result<Estimate>> = angles
        .par_iter()
        .enumerate()
        .map(|(i, deg)| estimate(material.as_ref(), radians(*deg), opts.samples, i as u64))
        .collect();

    println!("theta_o(deg)  importance(r g b)            uniform(r g b)               rejected");
    for r in results {
        let e = r?;
        let a = e.importance.to_rgb();
        let b = e.uniform.to_rgb();
        println!(
            "{:>11.2}  {:.4} {:.4} {:.4}       {:.4} {:.4} {:.4}       {}",
            degrees(e.theta_o),
            a[0],
            a[1],
            a[2],
            b[0],
            b[1],
            b[2],
            e.rejected
        );
    }
    return Ok(());
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);
    if let Err(e) = run(&opts) {
        error!("{}", e);
        process::exit(-1);
    }
}
