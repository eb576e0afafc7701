use crate::core::instances::Instance;

/// The China/Japan example from Manning, Raghavan & Schütze, ch. 13:
/// four labeled documents and one unlabeled query (id 5).
pub fn textbook_demo() -> Vec<Instance> {
    vec![
        Instance::labeled(1, ["Chinese", "Beijing", "Chinese"], "Yes"),
        Instance::labeled(2, ["Chinese", "Chinese", "Shanghai"], "Yes"),
        Instance::labeled(3, ["Chinese", "Macao"], "Yes"),
        Instance::labeled(4, ["Chinese", "Tokyo", "Japan"], "No"),
        Instance::unlabeled(5, ["Chinese", "Chinese", "Chinese", "Tokyo", "Japan"]),
    ]
}
