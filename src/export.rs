//! Write explorer output as a stream of YAML documents, for plotting
//! outside of Rust.

use crate::config::{insert, real, ExplorerConfig};
use crate::explorer::{DerivativeSnapshot, RegressionSnapshot};
use crate::regression::{CostSample, PredictionRow};
use crate::CurvePoint;
use std::io::Write;
use thiserror::Error;
use yaml_rust::yaml::Hash;
use yaml_rust::{EmitError, Yaml, YamlEmitter};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write yaml: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot emit yaml: {0:?}")]
    Emit(EmitError),
}

pub trait ToYaml {
    fn to_yaml(&self) -> Yaml;
}

fn string(s: &str) -> Yaml {
    Yaml::String(s.to_string())
}

fn list<T: ToYaml>(items: &[T]) -> Yaml {
    Yaml::Array(items.iter().map(ToYaml::to_yaml).collect())
}

impl ToYaml for CurvePoint {
    fn to_yaml(&self) -> Yaml {
        let mut h = Hash::new();
        insert(&mut h, "x", real(self.x));
        insert(&mut h, "y", real(self.y));
        Yaml::Hash(h)
    }
}

impl ToYaml for CostSample {
    fn to_yaml(&self) -> Yaml {
        let mut h = Hash::new();
        insert(&mut h, "w", real(self.w));
        insert(&mut h, "cost", real(self.cost));
        Yaml::Hash(h)
    }
}

impl ToYaml for PredictionRow {
    fn to_yaml(&self) -> Yaml {
        let mut h = Hash::new();
        insert(&mut h, "x", real(self.x));
        insert(&mut h, "actual", real(self.actual));
        insert(&mut h, "prediction", real(self.prediction));
        insert(&mut h, "error", real(self.error));
        insert(&mut h, "squared_error", real(self.squared_error));
        Yaml::Hash(h)
    }
}

impl ToYaml for RegressionSnapshot {
    fn to_yaml(&self) -> Yaml {
        let mut h = Hash::new();
        insert(&mut h, "explorer", string("regression"));
        insert(&mut h, "w", real(self.params.w));
        insert(&mut h, "b", real(self.params.b));
        insert(&mut h, "cost", real(self.cost));
        insert(&mut h, "sum_squared_errors", real(self.sum_squared_errors));
        insert(&mut h, "examples", Yaml::Integer(self.examples as i64));
        insert(&mut h, "fit", string(self.fit.label()));
        insert(&mut h, "current", self.current.to_yaml());
        insert(&mut h, "predictions", list(&self.predictions));
        insert(&mut h, "actual_points", list(&self.actual_points));
        insert(&mut h, "model_line", list(&self.model_line));
        insert(&mut h, "cost_curve", list(&self.cost_curve));
        Yaml::Hash(h)
    }
}

impl ToYaml for DerivativeSnapshot {
    fn to_yaml(&self) -> Yaml {
        let mut h = Hash::new();
        insert(&mut h, "explorer", string("derivative"));
        insert(&mut h, "function", string(self.function.key()));
        insert(&mut h, "name", string(self.name));
        insert(&mut h, "derivative_formula", string(self.derivative_formula));
        insert(&mut h, "x", real(self.x));
        insert(&mut h, "h", real(self.h));
        insert(&mut h, "y1", real(self.y1));
        insert(&mut h, "y2", real(self.y2));
        insert(&mut h, "approximate", real(self.approximate));
        insert(&mut h, "exact", real(self.exact));
        insert(&mut h, "difference", real(self.difference));
        insert(&mut h, "quality", string(self.quality.label()));
        insert(&mut h, "curve", list(&self.curve));
        insert(&mut h, "tangent", list(&self.tangent));
        insert(&mut h, "secant", list(&self.secant));
        Yaml::Hash(h)
    }
}

impl ToYaml for ExplorerConfig {
    fn to_yaml(&self) -> Yaml {
        ExplorerConfig::to_yaml(self)
    }
}

/// Write each document, each introduced by `---`, to `out`.
pub fn write_yaml_documents<W: Write>(docs: &[Yaml], out: &mut W) -> Result<(), ExportError> {
    for doc in docs {
        let mut text = String::new();
        YamlEmitter::new(&mut text)
            .dump(doc)
            .map_err(ExportError::Emit)?;
        text.push('\n');
        out.write_all(text.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
