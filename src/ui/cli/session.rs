use crate::classifiers::{Classifier, MultinomialNaiveBayes};
use crate::core::corpus::tokenize;
use crate::core::instances::Instance;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::build::{build_corpus, build_holdout};
use crate::tasks::HoldoutReport;
use crate::ui::types::choices::{CorpusChoice, HoldoutParameters, TaskChoice};
use anyhow::{Context, Result};
use std::io::Write;

/// Loads a corpus, trains on its labeled part, classifies its unlabeled part,
/// then runs tasks until the user quits.
pub fn run_session<D: PromptDriver, W: Write>(driver: &D, out: &mut W) -> Result<()> {
    let corpus_choice = prompt_choice::<CorpusChoice, _>(driver)?;
    let corpus = build_corpus(corpus_choice).context("failed to load corpus")?;

    let (labeled, pending): (Vec<Instance>, Vec<Instance>) =
        corpus.iter().cloned().partition(|i| !i.is_category_missing());

    let mut classifier = MultinomialNaiveBayes::new();
    classifier.train(&labeled).context("training failed")?;

    if let Some(model) = classifier.model() {
        writeln!(
            out,
            "trained on {} instances: {} categories, {} terms",
            labeled.len(),
            model.categories().len(),
            model.vocabulary().len()
        )?;
    }

    for instance in &pending {
        let label = classifier.classify(instance)?;
        writeln!(out, "instance {} -> {label}", instance.id)?;
    }

    loop {
        match prompt_choice::<TaskChoice, _>(driver)? {
            TaskChoice::Classify(p) => {
                let instance = Instance::unlabeled(0, tokenize(&p.text));
                for s in classifier.scores(&instance)? {
                    writeln!(out, "  {:<20} {:>12.4}", s.category, s.score)?;
                }
                writeln!(out, "-> {}", classifier.classify(&instance)?)?;
            }
            TaskChoice::EvaluateHoldout(p) => match evaluate_holdout(p, &corpus) {
                Ok(report) => writeln!(out, "{report}")?,
                Err(err) => {
                    tracing::warn!(error = %format!("{err:#}"), "holdout evaluation failed");
                    writeln!(out, "hold-out failed: {err:#}")?;
                }
            },
            TaskChoice::Quit(_) => break,
        }
    }
    Ok(())
}

/// Runs on a fresh classifier so the session's model is left as is.
fn evaluate_holdout(params: HoldoutParameters, corpus: &[Instance]) -> Result<HoldoutReport> {
    let task = build_holdout(params)?;
    let mut fresh = MultinomialNaiveBayes::new();
    Ok(task.run(&mut fresh, corpus)?)
}
