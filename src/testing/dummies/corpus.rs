use crate::core::corpus::textbook_demo;
use crate::core::instances::Instance;

/// The labeled half of [`textbook_demo`].
pub fn textbook_corpus() -> Vec<Instance> {
    textbook_demo()
        .into_iter()
        .filter(|i| !i.is_category_missing())
        .collect()
}

/// `Chinese Chinese Chinese Tokyo Japan`, expected to be classified `Yes`.
pub fn textbook_query() -> Instance {
    textbook_demo()
        .into_iter()
        .find(|i| i.is_category_missing())
        .expect("demo corpus carries one unlabeled query")
}

/// Twenty short, clearly separable documents split evenly across two labels.
pub fn spam_corpus() -> Vec<Instance> {
    let spam = [
        "win cash now",
        "free prize claim now",
        "cheap pills free shipping",
        "win a free cruise",
        "claim your cash prize",
        "free free free offer",
        "urgent cash offer win",
        "limited offer claim prize",
        "cheap cash loans now",
        "win win free money",
    ];
    let ham = [
        "meeting moved to monday",
        "lunch with the team tomorrow",
        "please review the report",
        "notes from the meeting",
        "see the team at lunch",
        "the report is attached",
        "team meeting on monday",
        "review notes before the meeting",
        "tomorrow the team meets",
        "the notes are attached",
    ];

    spam.iter()
        .map(|t| (t, "spam"))
        .chain(ham.iter().map(|t| (t, "ham")))
        .enumerate()
        .map(|(i, (text, label))| Instance::labeled(i as u64, text.split_whitespace(), label))
        .collect()
}
