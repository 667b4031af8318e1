use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::LineChartTree;

pub const LINE_CHART_TREE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartTreeJsonContractV1 {
    pub schema_version: u32,
    /// Composed tree with callbacks reduced to their serializable parts.
    pub tree: Value,
}

impl LineChartTree {
    pub fn to_json_contract_v1(&self) -> ChartResult<LineChartTreeJsonContractV1> {
        let tree = serde_json::to_value(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize line chart tree: {e}"))
        })?;
        Ok(LineChartTreeJsonContractV1 {
            schema_version: LINE_CHART_TREE_JSON_SCHEMA_V1,
            tree,
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = self.to_json_contract_v1()?;
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize tree contract v1: {e}"))
        })
    }
}

impl LineChartTreeJsonContractV1 {
    /// Parses a contract payload, rejecting unknown schema versions.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse tree contract payload: {e}"))
        })?;
        if payload.schema_version != LINE_CHART_TREE_JSON_SCHEMA_V1 {
            return Err(ChartError::UnsupportedSchema {
                contract: "line chart tree",
                version: payload.schema_version,
            });
        }
        Ok(payload)
    }
}
