//! Explorer parameters, with defaults at the explorers' initial slider
//! positions and an optional YAML override.
//!
//! ```yaml
//! regression:
//!   w: 0.01
//!   b: 0
//!   dataset: [[100, 1], [200, 2], [300, 3], [400, 4]]
//!   x_range: [0, 450]
//!   x_step: 50
//!   w_range: [0, 0.05]
//!   w_step: 0.001
//! derivative:
//!   function: cubic
//!   x: 2
//!   h: 0.5
//!   x_range: [-3, 5]
//!   x_step: 0.1
//!   tangent_half_width: 2
//!   tangent_step: 0.1
//!   secant_extension: 1
//! ```
//!
//! Every key is optional; missing keys keep their default.

use crate::derivative::{FunctionKind, UnknownFunction, DEFAULT_SECANT_EXTENSION};
use crate::error::DomainError;
use crate::grid::SampleRange;
use crate::regression::{Dataset, RegressionParams};
use crate::utils::house_prices;
use std::fs;
use std::path::Path;
use thiserror::Error;
use yaml_rust::yaml::{Array, Hash};
use yaml_rust::{ScanError, Yaml, YamlLoader};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid yaml: {0}")]
    Scan(#[from] ScanError),

    #[error("config key `{key}` must be {expected}")]
    Type { key: String, expected: &'static str },

    #[error(transparent)]
    UnknownFunction(#[from] UnknownFunction),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegressionConfig {
    pub dataset: Dataset,
    pub params: RegressionParams,
    /// Where the model line is drawn.
    pub x_range: SampleRange,
    /// Weights sampled for the cost curve.
    pub w_range: SampleRange,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        RegressionConfig {
            dataset: house_prices(),
            params: RegressionParams::new(10., 0.),
            x_range: SampleRange::unchecked(0., 450., 50.),
            w_range: SampleRange::unchecked(0., 0.05, 0.001),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeConfig {
    pub function: FunctionKind,
    pub x: f64,
    pub h: f64,
    /// Where the function's graph is drawn.
    pub x_range: SampleRange,
    pub tangent_half_width: f64,
    pub tangent_step: f64,
    pub secant_extension: f64,
}

impl Default for DerivativeConfig {
    fn default() -> Self {
        DerivativeConfig {
            function: FunctionKind::Quadratic,
            x: 2.,
            h: 0.5,
            x_range: SampleRange::unchecked(-3., 5., 0.1),
            tangent_half_width: 2.,
            tangent_step: 0.1,
            secant_extension: DEFAULT_SECANT_EXTENSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerConfig {
    pub regression: RegressionConfig,
    pub derivative: DerivativeConfig,
}

impl ExplorerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ExplorerConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        ExplorerConfig::from_yaml_str(&text)
    }

    /// Only the first YAML document is read; an empty input yields the defaults.
    pub fn from_yaml_str(text: &str) -> Result<ExplorerConfig, ConfigError> {
        let docs = YamlLoader::load_from_str(text)?;
        match docs.first() {
            Some(doc) => ExplorerConfig::from_yaml(doc),
            None => Ok(ExplorerConfig::default()),
        }
    }

    pub fn from_yaml(doc: &Yaml) -> Result<ExplorerConfig, ConfigError> {
        let mut config = ExplorerConfig::default();

        let node = &doc["regression"];
        let r = &mut config.regression;
        if let Some(w) = number(node, "w")? {
            r.params.w = w;
        }
        if let Some(b) = number(node, "b")? {
            r.params.b = b;
        }
        if let Some(dataset) = dataset(node)? {
            r.dataset = dataset;
        }
        r.x_range = range(node, "x_range", "x_step", r.x_range)?;
        r.w_range = range(node, "w_range", "w_step", r.w_range)?;

        let node = &doc["derivative"];
        let d = &mut config.derivative;
        match &node["function"] {
            Yaml::BadValue => {}
            Yaml::String(key) => d.function = key.parse()?,
            _ => return Err(type_error("function", "a function name")),
        }
        if let Some(x) = number(node, "x")? {
            d.x = x;
        }
        if let Some(h) = number(node, "h")? {
            d.h = h;
        }
        d.x_range = range(node, "x_range", "x_step", d.x_range)?;
        if let Some(v) = number(node, "tangent_half_width")? {
            d.tangent_half_width = v;
        }
        if let Some(v) = number(node, "tangent_step")? {
            d.tangent_step = v;
        }
        if let Some(v) = number(node, "secant_extension")? {
            d.secant_extension = v;
        }
        Ok(config)
    }

    /// The effective parameters, in the same layout `from_yaml` reads.
    pub fn to_yaml(&self) -> Yaml {
        let r = &self.regression;
        let dataset: Array = r
            .dataset
            .pairs()
            .map(|(x, y)| Yaml::Array(vec![real(x), real(y)]))
            .collect();
        let mut regression = Hash::new();
        insert(&mut regression, "w", real(r.params.w));
        insert(&mut regression, "b", real(r.params.b));
        insert(&mut regression, "dataset", Yaml::Array(dataset));
        insert_range(&mut regression, "x_range", "x_step", &r.x_range);
        insert_range(&mut regression, "w_range", "w_step", &r.w_range);

        let d = &self.derivative;
        let mut derivative = Hash::new();
        insert(
            &mut derivative,
            "function",
            Yaml::String(d.function.key().to_string()),
        );
        insert(&mut derivative, "x", real(d.x));
        insert(&mut derivative, "h", real(d.h));
        insert_range(&mut derivative, "x_range", "x_step", &d.x_range);
        insert(
            &mut derivative,
            "tangent_half_width",
            real(d.tangent_half_width),
        );
        insert(&mut derivative, "tangent_step", real(d.tangent_step));
        insert(
            &mut derivative,
            "secant_extension",
            real(d.secant_extension),
        );

        let mut root = Hash::new();
        insert(&mut root, "regression", Yaml::Hash(regression));
        insert(&mut root, "derivative", Yaml::Hash(derivative));
        Yaml::Hash(root)
    }
}

/// A YAML float, spelled so that yaml-rust reads it back as one.
pub(crate) fn real(v: f64) -> Yaml {
    let text = if v.is_nan() {
        ".nan".to_string()
    } else if v == f64::INFINITY {
        ".inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-.inf".to_string()
    } else {
        format!("{:?}", v)
    };
    Yaml::Real(text)
}

pub(crate) fn insert(hash: &mut Hash, key: &str, value: Yaml) {
    hash.insert(Yaml::String(key.to_string()), value);
}

fn insert_range(hash: &mut Hash, range_key: &str, step_key: &str, range: &SampleRange) {
    insert(
        hash,
        range_key,
        Yaml::Array(vec![real(range.min()), real(range.max())]),
    );
    insert(hash, step_key, real(range.step()));
}

fn type_error(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::Type {
        key: key.to_string(),
        expected,
    }
}

fn as_number(value: &Yaml) -> Option<f64> {
    match value {
        Yaml::Integer(i) => Some(*i as f64),
        Yaml::Real(_) => value.as_f64(),
        _ => None,
    }
}

fn number(node: &Yaml, key: &str) -> Result<Option<f64>, ConfigError> {
    match &node[key] {
        Yaml::BadValue => Ok(None),
        value => as_number(value)
            .map(Some)
            .ok_or_else(|| type_error(key, "a number")),
    }
}

/// `[min, max]` under `range_key` and the step under `step_key`, each
/// falling back to `default`.
fn range(
    node: &Yaml,
    range_key: &str,
    step_key: &str,
    default: SampleRange,
) -> Result<SampleRange, ConfigError> {
    let (min, max) = match &node[range_key] {
        Yaml::BadValue => (default.min(), default.max()),
        Yaml::Array(bounds) if bounds.len() == 2 => {
            match (as_number(&bounds[0]), as_number(&bounds[1])) {
                (Some(min), Some(max)) => (min, max),
                _ => return Err(type_error(range_key, "a [min, max] pair of numbers")),
            }
        }
        _ => return Err(type_error(range_key, "a [min, max] pair of numbers")),
    };
    let step = number(node, step_key)?.unwrap_or_else(|| default.step());
    Ok(SampleRange::new(min, max, step)?)
}

fn dataset(node: &Yaml) -> Result<Option<Dataset>, ConfigError> {
    let rows = match &node["dataset"] {
        Yaml::BadValue => return Ok(None),
        Yaml::Array(rows) => rows,
        _ => return Err(type_error("dataset", "a list of [x, y] pairs")),
    };
    let mut pairs = Vec::with_capacity(rows.len());
    for row in rows {
        let pair = match row {
            Yaml::Array(p) if p.len() == 2 => (as_number(&p[0]), as_number(&p[1])),
            _ => (None, None),
        };
        match pair {
            (Some(x), Some(y)) => pairs.push((x, y)),
            _ => return Err(type_error("dataset", "a list of [x, y] pairs")),
        }
    }
    Ok(Some(Dataset::new(&pairs)))
}
