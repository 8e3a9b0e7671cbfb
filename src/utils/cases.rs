/// A named glob pattern, resolved relative to the search path at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkCase {
    pub name: &'static str,
    pub pattern: &'static str,
}

impl BenchmarkCase {
    pub const fn new(name: &'static str, pattern: &'static str) -> Self {
        BenchmarkCase { name, pattern }
    }
}

// Results are printed in this order.
pub const CASES: &[BenchmarkCase] = &[
    BenchmarkCase::new("basic", "stdlib/public/*/*.swift"),
    BenchmarkCase::new("intermediate", "lib/SILOptimizer/*/*.cpp"),
    BenchmarkCase::new("advanced", "lib/*/[A-Z]*.cpp"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order() {
        let names: Vec<_> = CASES.iter().map(|case| case.name).collect();
        assert_eq!(vec!["basic", "intermediate", "advanced"], names);
    }

    #[test]
    fn patterns_compile() {
        for case in CASES {
            assert!(
                glob::Pattern::new(case.pattern).is_ok(),
                "{:?} does not compile",
                case
            );
        }
    }
}
