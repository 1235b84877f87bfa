use std::path::Path;

use tract_onnx::prelude::*;

/// Scoring capability the HTTP layer depends on. The real implementation
/// wraps the ONNX artifact; tests substitute a fake.
pub trait Classifier: Send + Sync {
    /// Number of features the model expects per row.
    fn arity(&self) -> usize;

    /// Scores one row and returns the raw integer class code.
    fn classify(&self, features: &[f32]) -> anyhow::Result<i64>;
}

/// The trained credit-risk classifier, loaded once at startup and immutable
/// for the rest of the process lifetime.
pub struct OnnxClassifier {
    plan: SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>,
    arity: usize,
}

impl OnnxClassifier {
    pub fn load<P: AsRef<Path>>(model_path: P, arity: usize) -> TractResult<Self> {
        let plan = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), tvec!(1, arity)))?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { plan, arity })
    }
}

impl Classifier for OnnxClassifier {
    fn arity(&self) -> usize {
        self.arity
    }

    fn classify(&self, features: &[f32]) -> anyhow::Result<i64> {
        let input = Tensor::from_shape(&[1, self.arity], features)?;
        let outputs = self.plan.run(tvec!(input.into()))?;

        // sklearn-exported classifiers put the int64 label tensor first.
        let code = *outputs[0]
            .to_array_view::<i64>()?
            .iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("model produced an empty label tensor"))?;

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_fails_when_the_artifact_is_missing() {
        let result = OnnxClassifier::load("models/definitely_not_here.onnx", 48);
        assert!(result.is_err());
    }
}
