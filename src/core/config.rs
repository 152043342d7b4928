//! Material library files.
//!
//! A library is a JSON document listing named materials in declaration order:
//!
//! ```json
//! { "materials": [
//!     { "name": "blond", "type": "hair", "eumelanin": 0.3 },
//!     { "name": "floor", "type": "matte", "Kd": [0.4, 0.4, 0.4] },
//!     { "name": "dusty", "type": "mix", "materials": ["floor", "blond"], "amount": 0.2 }
//! ] }
//! ```
use crate::core::error::Result;
use crate::core::pbrt::*;

use serde::Deserialize;
use std::path::Path;

/// A gray value or an `[r, g, b]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SpectrumValue {
    Gray(Float),
    Rgb([Float; 3]),
}

impl SpectrumValue {
    pub fn to_spectrum(&self) -> Spectrum {
        match self {
            SpectrumValue::Gray(v) => Spectrum::from(*v),
            SpectrumValue::Rgb(c) => Spectrum::from(*c),
        }
    }
}

impl From<Float> for SpectrumValue {
    fn from(v: Float) -> Self {
        SpectrumValue::Gray(v)
    }
}

fn default_one() -> SpectrumValue {
    SpectrumValue::Gray(1.0)
}

fn default_half() -> SpectrumValue {
    SpectrumValue::Gray(0.5)
}

fn default_quarter() -> SpectrumValue {
    SpectrumValue::Gray(0.25)
}

fn default_hair_eta() -> Float {
    1.55
}

fn default_hair_beta() -> Float {
    0.3
}

fn default_plastic_roughness() -> Float {
    0.1
}

fn default_true() -> bool {
    true
}

/// Absorption comes from `sigma_a`, else `color`, else the melanin
/// concentrations, in that order of priority.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HairDescription {
    #[serde(default)]
    pub sigma_a: Option<SpectrumValue>,
    #[serde(default)]
    pub color: Option<SpectrumValue>,
    #[serde(default)]
    pub eumelanin: Option<Float>,
    #[serde(default)]
    pub pheomelanin: Option<Float>,
    #[serde(default = "default_hair_eta")]
    pub eta: Float,
    #[serde(default = "default_hair_beta")]
    pub beta_m: Float,
    #[serde(default = "default_hair_beta")]
    pub beta_n: Float,
    #[serde(default = "default_one")]
    pub weight: SpectrumValue,
    #[serde(default)]
    pub double_sided: bool,
}

impl Default for HairDescription {
    fn default() -> Self {
        HairDescription {
            sigma_a: None,
            color: None,
            eumelanin: None,
            pheomelanin: None,
            eta: default_hair_eta(),
            beta_m: default_hair_beta(),
            beta_n: default_hair_beta(),
            weight: default_one(),
            double_sided: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatteDescription {
    #[serde(rename = "Kd", default = "default_half")]
    pub kd: SpectrumValue,
    /// Degrees; zero selects the Lambertian model.
    #[serde(default)]
    pub sigma: Float,
}

impl Default for MatteDescription {
    fn default() -> Self {
        MatteDescription {
            kd: default_half(),
            sigma: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlasticDescription {
    #[serde(rename = "Kd", default = "default_quarter")]
    pub kd: SpectrumValue,
    #[serde(rename = "Ks", default = "default_quarter")]
    pub ks: SpectrumValue,
    #[serde(default = "default_plastic_roughness")]
    pub roughness: Float,
    #[serde(default = "default_true")]
    pub remaproughness: bool,
}

impl Default for PlasticDescription {
    fn default() -> Self {
        PlasticDescription {
            kd: default_quarter(),
            ks: default_quarter(),
            roughness: default_plastic_roughness(),
            remaproughness: true,
        }
    }
}

/// Blend of two earlier materials; `amount` weights the first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MixDescription {
    pub materials: [String; 2],
    #[serde(default = "default_half")]
    pub amount: SpectrumValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialKind {
    Hair(HairDescription),
    Matte(MatteDescription),
    Plastic(PlasticDescription),
    Mix(MixDescription),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaterialDescription {
    pub name: String,
    #[serde(flatten)]
    pub kind: MaterialKind,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LibraryDescription {
    #[serde(default)]
    pub materials: Vec<MaterialDescription>,
}

impl LibraryDescription {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let lib: LibraryDescription = serde_json::from_str(s)?;
        return Ok(lib);
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        log::debug!("Loading material library {}", path.display());
        return Self::from_json_str(&s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let lib = LibraryDescription::from_json_str(
            r#"{ "materials": [ { "name": "h", "type": "hair" } ] }"#,
        )
        .unwrap();
        assert_eq!(lib.materials.len(), 1);
        assert_eq!(lib.materials[0].name, "h");
        match &lib.materials[0].kind {
            MaterialKind::Hair(h) => assert_eq!(*h, HairDescription::default()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_spectrum_values() {
        let lib = LibraryDescription::from_json_str(
            r#"{ "materials": [
                { "name": "m", "type": "matte", "Kd": [0.25, 0.5, 0.75], "sigma": 20 },
                { "name": "p", "type": "plastic", "Ks": 0.5 }
            ] }"#,
        )
        .unwrap();
        match &lib.materials[0].kind {
            MaterialKind::Matte(m) => {
                assert_eq!(m.kd.to_spectrum(), Spectrum::new(0.25, 0.5, 0.75));
                assert_eq!(m.sigma, 20.0);
            }
            other => panic!("unexpected {:?}", other),
        }
        match &lib.materials[1].kind {
            MaterialKind::Plastic(p) => {
                assert_eq!(p.ks.to_spectrum(), Spectrum::from(0.5));
                assert_eq!(p.kd.to_spectrum(), Spectrum::from(0.25));
                assert!(p.remaproughness);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let r = LibraryDescription::from_json_str(
            r#"{ "materials": [ { "name": "x", "type": "velvet" } ] }"#,
        );
        assert!(matches!(r, Err(ScatterError::Config(_))));
    }
}
