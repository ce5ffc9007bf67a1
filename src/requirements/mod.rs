/// Requirements domain - pure logic for classifying and pruning
/// requirements-file lines, free of any I/O
pub mod domain;
pub mod services;
