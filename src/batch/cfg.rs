use serde::{Serialize, Deserialize};

use crate::args::{
    self,
    DimensionArgs,
};
use crate::shapes::DimensionPolicy;

/// Batch config file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchCfg {
    /// Dimension policy for every area and volume in the batch.
    #[serde(default)]
    pub policy: DimensionPolicy,

    /// Calculations to run, in order.
    #[serde(alias = "calcs")]
    pub calculations: Vec<Calculation>,
}
impl BatchCfg {
    /// Load a batch config from a json, toml or yaml file.
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let cfg: BatchCfg = crate::io::read_cfg_file(cfg_file)?;

        if cfg.calculations.is_empty() {
            args::err_str(&format!("No calculations listed in batch config: {}", cfg_file))?;
        }

        Ok(cfg)
    }
}

/// A single calculation in a batch.
/// Shape names stay as text so an unknown shape becomes a reported outcome, not a load error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Calculation {
    Area {
        shape: String,
        #[serde(default)]
        dimensions: DimensionArgs,
    },
    Volume {
        shape: String,
        #[serde(default)]
        dimensions: DimensionArgs,
    },
    Triplet {
        a: f64,
        b: f64,
        c: f64,
    },
    Angle {
        degrees: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_cfg() {
        let yaml = concat!(
            "policy: strict\n",
            "calculations:\n",
            "  - kind: area\n",
            "    shape: Circle\n",
            "    dimensions:\n",
            "      radius: 2\n",
            "  - kind: triplet\n",
            "    a: 3\n",
            "    b: 4\n",
            "    c: 5\n",
            "  - kind: angle\n",
            "    degrees: 30.5\n",
        );
        let cfg: BatchCfg = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.policy, DimensionPolicy::Strict);
        assert_eq!(cfg.calculations, vec![
            Calculation::Area{
                shape: "Circle".to_string(),
                dimensions: DimensionArgs{radius: Some(2.0), ..Default::default()},
            },
            Calculation::Triplet{a: 3.0, b: 4.0, c: 5.0},
            Calculation::Angle{degrees: 30.5},
        ]);
    }

    #[test]
    fn json_cfg_defaults_policy() {
        let json = r#"{"calculations": [{"kind": "volume", "shape": "cube", "dimensions": {"side": 3}}]}"#;
        let cfg: BatchCfg = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.policy, DimensionPolicy::Permissive);
        assert_eq!(cfg.calculations, vec![Calculation::Volume{
            shape: "cube".to_string(),
            dimensions: DimensionArgs{length: Some(3.0), ..Default::default()},
        }]);
    }

    #[test]
    fn toml_cfg() {
        let toml_str = concat!(
            "[[calculations]]\n",
            "kind = \"volume\"\n",
            "shape = \"cone\"\n",
            "dimensions = { radius = 1.0, height = 3 }\n",
            "\n",
            "[[calculations]]\n",
            "kind = \"area\"\n",
            "shape = \"hexagon\"\n",
        );
        let cfg: BatchCfg = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.calculations.len(), 2);
        assert_eq!(cfg.calculations[1], Calculation::Area{shape: "hexagon".to_string(), dimensions: DimensionArgs::default()});
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json = r#"{"calculations": [{"kind": "perimeter", "shape": "square"}]}"#;
        assert!(serde_json::from_str::<BatchCfg>(json).is_err());
    }

    #[test]
    fn empty_batch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        let path = path.to_str().unwrap();
        crate::io::write_to_file(path, r#"{"calculations": []}"#).unwrap();
        assert!(matches!(BatchCfg::from_cfg_file(path), Err(args::ArgError::StringOnly(_))));
    }
}
