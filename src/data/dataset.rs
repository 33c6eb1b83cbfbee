use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// One `(input, target)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

/// A fixed, ordered, validated set of training examples.
///
/// Every input is `input_size` wide and every target `output_size` wide;
/// the set is never empty. The order is the traversal order of each
/// training iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    examples: Vec<TrainingExample>,
    input_size: usize,
    output_size: usize,
}

impl TrainingSet {
    /// Pairs `inputs[i]` with `targets[i]`, rejecting the whole set if any
    /// vector has the wrong width or the two lists differ in length.
    pub fn new(
        inputs: Vec<Vec<f64>>,
        targets: Vec<Vec<f64>>,
        input_size: usize,
        output_size: usize,
    ) -> Result<TrainingSet> {
        if inputs.len() != targets.len() {
            return Err(NetworkError::ExampleCountMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        if inputs.is_empty() {
            return Err(NetworkError::EmptyTrainingSet);
        }
        check_inputs(&inputs, input_size)?;
        for (example, target) in targets.iter().enumerate() {
            if target.len() != output_size {
                return Err(NetworkError::TargetLength {
                    example,
                    expected: output_size,
                    got: target.len(),
                });
            }
        }

        let examples = inputs
            .into_iter()
            .zip(targets)
            .map(|(input, target)| TrainingExample { input, target })
            .collect();
        Ok(TrainingSet {
            examples,
            input_size,
            output_size,
        })
    }

    /// The four-row XOR truth table: 00 -> 0, 01 -> 1, 10 -> 1, 11 -> 0.
    pub fn xor() -> TrainingSet {
        let rows = [
            ([0.0, 0.0], 0.0),
            ([0.0, 1.0], 1.0),
            ([1.0, 0.0], 1.0),
            ([1.0, 1.0], 0.0),
        ];
        TrainingSet {
            examples: rows
                .iter()
                .map(|(input, target)| TrainingExample {
                    input: input.to_vec(),
                    target: vec![*target],
                })
                .collect(),
            input_size: 2,
            output_size: 1,
        }
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn inputs(&self) -> Vec<Vec<f64>> {
        self.examples.iter().map(|e| e.input.clone()).collect()
    }
}

/// Raw dataset file contents: inputs and, for training, matching targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Vec<f64>>>,
}

impl Dataset {
    /// Deserializes a dataset from a JSON file. Shapes are not checked here;
    /// see `into_training_set` and `checked_inputs`.
    pub fn load_json(path: &str) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the dataset to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Validates the dataset for training against the configured widths.
    pub fn into_training_set(self, input_size: usize, output_size: usize) -> Result<TrainingSet> {
        let targets = self.targets.ok_or(NetworkError::MissingTargets)?;
        TrainingSet::new(self.inputs, targets, input_size, output_size)
    }

    /// Returns the inputs after checking each is `input_size` wide, and that
    /// targets, if present, line up with them.
    pub fn checked_inputs(&self, input_size: usize, output_size: usize) -> Result<&[Vec<f64>]> {
        check_inputs(&self.inputs, input_size)?;
        if let Some(targets) = &self.targets {
            if targets.len() != self.inputs.len() {
                return Err(NetworkError::ExampleCountMismatch {
                    inputs: self.inputs.len(),
                    targets: targets.len(),
                });
            }
            if let Some(example) = targets.iter().position(|t| t.len() != output_size) {
                return Err(NetworkError::TargetLength {
                    example,
                    expected: output_size,
                    got: targets[example].len(),
                });
            }
        }
        Ok(&self.inputs)
    }
}

impl From<&TrainingSet> for Dataset {
    fn from(set: &TrainingSet) -> Self {
        Dataset {
            inputs: set.inputs(),
            targets: Some(set.examples.iter().map(|e| e.target.clone()).collect()),
        }
    }
}

fn check_inputs(inputs: &[Vec<f64>], input_size: usize) -> Result<()> {
    if let Some(example) = inputs.iter().position(|i| i.len() != input_size) {
        return Err(NetworkError::InputLength {
            example,
            expected: input_size,
            got: inputs[example].len(),
        });
    }
    Ok(())
}
