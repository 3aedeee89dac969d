/// **(internal)** Explicitly test the checker on hand-written scenarios with known outcomes.
mod _test_cec_scenarios;

/// **(internal)** Generate pseudo-random pairs of networks and verify the checker against
/// exhaustive evaluation of every input valuation.
mod _test_cec_fuzzing;
