//! Mechanism for loading and sharing the selection configuration
//!
//! The nominal cut values of the measurement are compiled in via `Default`;
//! a configuration file is only needed to run selection variations. The
//! file format is deliberately simple: one value per line, first
//! whitespace-separated chunk of text on the line, in the fixed order of the
//! fields below, with everything after the value available for comments.

use crate::{
    fiducial::{particle::ParticleCuts, parton::PartonCuts},
    numeric::Float,
    Result,
};

use anyhow::{ensure, format_err, Context, Error};

use std::{fs::File, io::Read, path::Path, str::FromStr};

/// Full cut configuration of the fiducial selection
#[derive(Default)]
pub struct Configuration {
    /// Parton-level selection thresholds
    pub parton: PartonCuts,

    /// Particle-level selection thresholds
    pub particle: ParticleCuts,
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and print it out
    pub fn load(file_name: impl AsRef<Path>) -> Result<Self> {
        // Read out the configuration file or die trying
        let config_str = {
            let mut config_file = File::open(file_name)?;
            let mut buffer = String::new();
            config_file.read_to_string(&mut buffer)?;
            buffer
        };

        // Iterate over the configuration items: the first non-whitespace
        // chunk of text on each line, ignoring blank lines
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // This closure fetches the next configuration item, tagging it with
        // the name of the configuration field which it is supposed to fill to
        // ease error reporting, and handling unexpected end-of-file too
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| format_err!("Missing configuration of {}", name))
        };

        // Decode the configuration items into concrete values
        let config = Configuration {
            parton: PartonCuts {
                photon_pt_min: next_item("photon_pt_min")?.parse::<Float>()?,
                photon_abs_eta_max: next_item("photon_abs_eta_max")?.parse::<Float>()?,
                iso_cone_dr: next_item("iso_cone_dr")?.parse::<Float>()?,
                iso_pt_min: next_item("iso_pt_min")?.parse::<Float>()?,
                lepton_pt_min: next_item("lepton_pt_min")?.parse::<Float>()?,
                lepton_abs_eta_max: next_item("lepton_abs_eta_max")?.parse::<Float>()?,
            },
            particle: ParticleCuts {
                photon_pt_min: next_item("pl_photon_pt_min")?.parse::<Float>()?,
                photon_abs_eta_max: next_item("pl_photon_abs_eta_max")?.parse::<Float>()?,
                photon_lepton_dr: next_item("pl_photon_lepton_dr")?.parse::<Float>()?,
                lepton_pt_min: next_item("pl_lepton_pt_min")?.parse::<Float>()?,
                lepton_abs_eta_max: next_item("pl_lepton_abs_eta_max")?.parse::<Float>()?,
                jet_pt_min: next_item("pl_jet_pt_min")?.parse::<Float>()?,
                jet_abs_eta_max: next_item("pl_jet_abs_eta_max")?.parse::<Float>()?,
                jet_iso_dr: next_item("pl_jet_iso_dr")?.parse::<Float>()?,
            },
        };

        // Display it in the fixed layout used for run-log comparisons
        config.print();

        // A selection with inverted or degenerate cones cannot mean anything
        ensure!(
            config.parton.iso_cone_dr > 0.,
            "The parton-level isolation cone must have a positive radius"
        );
        ensure!(
            config.particle.photon_lepton_dr > 0. && config.particle.jet_iso_dr > 0.,
            "The particle-level veto cones must have positive radii"
        );
        ensure!(
            config.parton.photon_pt_min > 0. && config.particle.photon_pt_min > 0.,
            "Photon pt thresholds must be positive"
        );

        // If nothing bad occured, we can now return the configuration
        Ok(config)
    }

    /// Display the configuration in a fixed layout
    pub fn print(&self) {
        println!("photon_pt_min         : {}", self.parton.photon_pt_min);
        println!("photon_abs_eta_max    : {}", self.parton.photon_abs_eta_max);
        println!("iso_cone_dr           : {}", self.parton.iso_cone_dr);
        println!("iso_pt_min            : {}", self.parton.iso_pt_min);
        println!("lepton_pt_min         : {}", self.parton.lepton_pt_min);
        println!("lepton_abs_eta_max    : {}", self.parton.lepton_abs_eta_max);
        println!("pl_photon_pt_min      : {}", self.particle.photon_pt_min);
        println!("pl_photon_abs_eta_max : {}", self.particle.photon_abs_eta_max);
        println!("pl_photon_lepton_dr   : {}", self.particle.photon_lepton_dr);
        println!("pl_lepton_pt_min      : {}", self.particle.lepton_pt_min);
        println!("pl_lepton_abs_eta_max : {}", self.particle.lepton_abs_eta_max);
        println!("pl_jet_pt_min         : {}", self.particle.jet_pt_min);
        println!("pl_jet_abs_eta_max    : {}", self.particle.jet_abs_eta_max);
        println!("pl_jet_iso_dr         : {}", self.particle.jet_iso_dr);
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .map_err(Error::new)
            .context(format!("Could not parse configuration of {}", self.name))
    }
}
