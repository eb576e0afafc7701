use crate::tasks::HoldoutEvaluation;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::HoldoutParameters;

impl TryFrom<HoldoutParameters> for HoldoutEvaluation {
    type Error = BuildError;

    fn try_from(p: HoldoutParameters) -> Result<Self, Self::Error> {
        Ok(HoldoutEvaluation::new(p.test_fraction, p.seed)?.with_per_class_metrics(p.per_class))
    }
}

pub fn build_holdout(p: HoldoutParameters) -> Result<HoldoutEvaluation, BuildError> {
    HoldoutEvaluation::try_from(p)
}
