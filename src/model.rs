use std::{
    fmt,
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use tracing::{debug, info, warn};

use crate::{
    config::SmoothingConfig,
    error::{ModelError, ModelResult, SampleError},
    report::ClassificationReport,
    sample::{samples, Sample, Shade},
};

/// Naive Bayes model over square binary pixel grids.
///
/// Counts are accumulated sample by sample, then turned into smoothed priors and
/// per-pixel likelihoods. A single malformed or mis-sized training sample
/// invalidates the whole model; every query on an invalid model fails with
/// [`ModelError::Unset`].
#[derive(Debug, Clone)]
pub struct Model {
    config: SmoothingConfig,
    grid_size: Option<usize>,
    total_samples: usize,
    class_totals: Vec<usize>,
    // [class][shade][pixel]
    counts: Vec<Vec<Vec<usize>>>,
    priors: Vec<f64>,
    // [class][shade][pixel]
    likelihoods: Vec<Vec<Vec<f64>>>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn new() -> Self {
        Self::with_config(SmoothingConfig::default())
    }

    pub fn with_config(config: SmoothingConfig) -> Self {
        Model {
            config,
            grid_size: None,
            total_samples: 0,
            class_totals: vec![0; config.num_classes()],
            counts: vec![vec![Vec::new(); config.num_shades()]; config.num_classes()],
            priors: vec![0.0; config.num_classes()],
            likelihoods: vec![vec![Vec::new(); config.num_shades()]; config.num_classes()],
        }
    }

    /// Trains from a corpus file. A missing file leaves the model untouched.
    pub fn build<P: AsRef<Path>>(&mut self, path: P) -> ModelResult<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            warn!("File open error: {}: {err}", path.display());
            err
        })?;
        info!("Building model from file: {}", path.display());
        self.train(BufReader::new(file))
    }

    /// Trains from every record of a corpus, then fits priors and likelihoods.
    pub fn train<R: BufRead>(&mut self, reader: R) -> ModelResult<()> {
        for sample in samples(reader) {
            let sample = match sample {
                Ok(sample) => sample,
                Err(err) => {
                    warn!("Invalid model: {err}");
                    self.invalidate();
                    return Err(err.into());
                }
            };
            if let Err(err) = self.process_sample(&sample) {
                warn!("Invalid model: {err}");
                return Err(err);
            }
        }
        self.finalize()
    }

    /// Adds one sample's counts. The first sample fixes the grid size; a sample of
    /// any other size invalidates the model.
    pub fn process_sample(&mut self, sample: &Sample) -> ModelResult<()> {
        let digit = sample.digit() as usize;
        if digit >= self.config.num_classes() {
            self.invalidate();
            return Err(ModelError::OutOfRange(format!("digit {digit}")));
        }

        let side_length = sample.side_length();
        if side_length == 0 {
            self.invalidate();
            return Err(SampleError::EmptyRow.into());
        }
        match self.grid_size {
            None => self.lock_grid(side_length),
            Some(expected) if expected != side_length => {
                self.invalidate();
                return Err(ModelError::DimensionMismatch {
                    expected,
                    found: side_length,
                });
            }
            Some(_) => {}
        }

        self.total_samples += 1;
        self.class_totals[digit] += 1;
        let class_counts = &mut self.counts[digit];
        for (pixel, shade) in sample.pixels().iter().enumerate() {
            class_counts[shade.index()][pixel] += 1;
        }
        debug!("Processed sample of digit {digit}");
        Ok(())
    }

    /// Turns the accumulated counts into smoothed priors and likelihoods.
    pub fn finalize(&mut self) -> ModelResult<()> {
        if self.grid_size.is_none() {
            return Err(ModelError::Unset);
        }
        let cfg = self.config;
        for class in 0..cfg.num_classes() {
            let class_total = self.class_totals[class];
            self.priors[class] = cfg.prior(class_total, self.total_samples);
            for shade in 0..cfg.num_shades() {
                self.likelihoods[class][shade] = self.counts[class][shade]
                    .iter()
                    .map(|&count| cfg.likelihood(count, class_total))
                    .collect();
            }
        }
        info!("Model built from {} samples", self.total_samples);
        Ok(())
    }

    pub fn invalidate(&mut self) {
        self.grid_size = None;
    }

    fn lock_grid(&mut self, side_length: usize) {
        let area = side_length * side_length;
        self.grid_size = Some(side_length);
        self.total_samples = 0;
        self.class_totals.fill(0);
        for class_counts in &mut self.counts {
            for shade_counts in class_counts.iter_mut() {
                shade_counts.clear();
                shade_counts.resize(area, 0);
            }
        }
    }

    /// Classifies every record of a labeled corpus file and tallies accuracy.
    pub fn classify<P: AsRef<Path>>(&self, path: P) -> ModelResult<ClassificationReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            warn!("File open error: {}: {err}", path.display());
            err
        })?;
        info!("Classifying samples from file: {}", path.display());
        let report = self.classify_reader(BufReader::new(file))?;
        info!("Accuracy of classification: {}", report.overall());
        Ok(report)
    }

    pub fn classify_reader<R: BufRead>(&self, reader: R) -> ModelResult<ClassificationReport> {
        if self.grid_size.is_none() {
            return Err(ModelError::Unset);
        }
        let mut report = ClassificationReport::new(self.config.num_classes());
        for sample in samples(reader) {
            let sample = sample?;
            let predicted = match self.classify_sample(&sample) {
                Ok(digit) => Some(digit as usize),
                Err(ModelError::DimensionMismatch { expected, found }) => {
                    debug!("Counting sample of size {found} as misclassified, model size is {expected}");
                    None
                }
                Err(err) => return Err(err),
            };
            report.record(sample.digit() as usize, predicted);
        }
        Ok(report)
    }

    /// Log-posterior score of every class for one sample.
    pub fn scores(&self, sample: &Sample) -> ModelResult<Vec<f64>> {
        let expected = self.grid_size.ok_or(ModelError::Unset)?;
        if sample.side_length() != expected {
            return Err(ModelError::DimensionMismatch {
                expected,
                found: sample.side_length(),
            });
        }
        Ok(self
            .priors
            .iter()
            .zip(&self.likelihoods)
            .map(|(prior, likelihoods)| {
                sample
                    .pixels()
                    .iter()
                    .enumerate()
                    .fold(prior.ln(), |acc, (pixel, shade)| {
                        acc + likelihoods[shade.index()][pixel].ln()
                    })
            })
            .collect())
    }

    /// Maximum a posteriori class of a sample. Ties go to the lowest digit.
    pub fn classify_sample(&self, sample: &Sample) -> ModelResult<u8> {
        let scores = self.scores(sample)?;
        let mut best = 0;
        for (class, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = class;
            }
        }
        Ok(best as u8)
    }

    /// Classifies every record of `inpath` and writes `ID,Digit,Predicted` rows to `outpath`.
    /// Samples whose size does not match the model get an empty prediction.
    pub fn predict<P: AsRef<Path>, Q: AsRef<Path>>(&self, inpath: P, outpath: Q) -> ModelResult<usize> {
        if self.grid_size.is_none() {
            return Err(ModelError::Unset);
        }
        let reader = BufReader::new(File::open(inpath)?);

        let mut results = Vec::new();
        for sample in samples(reader) {
            let sample = sample?;
            let predicted = match self.classify_sample(&sample) {
                Ok(digit) => digit.to_string(),
                Err(ModelError::DimensionMismatch { .. }) => String::new(),
                Err(err) => return Err(err),
            };
            results.push((sample.digit(), predicted));
        }

        let mut writer = csv::Writer::from_path(outpath)?;
        writer.write_record(["ID", "Digit", "Predicted"])?;
        for (i, (digit, predicted)) in results.iter().enumerate() {
            writer.write_record(&[(i + 1).to_string(), digit.to_string(), predicted.clone()])?;
        }
        writer.flush()?;

        Ok(results.len())
    }

    pub fn prior(&self, digit: usize) -> ModelResult<f64> {
        if self.grid_size.is_none() {
            return Err(ModelError::Unset);
        }
        self.priors
            .get(digit)
            .copied()
            .ok_or_else(|| ModelError::OutOfRange(format!("digit {digit}")))
    }

    pub fn likelihood(&self, digit: usize, shade: usize, row: usize, col: usize) -> ModelResult<f64> {
        let grid_size = self.grid_size.ok_or(ModelError::Unset)?;
        if digit >= self.config.num_classes()
            || shade >= self.config.num_shades()
            || row >= grid_size
            || col >= grid_size
        {
            return Err(ModelError::OutOfRange(format!(
                "digit {digit}, shade {shade}, row {row}, col {col}"
            )));
        }
        Ok(self.likelihoods[digit][shade][row * grid_size + col])
    }

    /// Likelihood of a typed shade; see [`Model::likelihood`].
    pub fn shade_likelihood(&self, digit: usize, shade: Shade, row: usize, col: usize) -> ModelResult<f64> {
        self.likelihood(digit, shade.index(), row, col)
    }

    /// Side length of the grids this model was fitted on, `None` while unset or invalidated.
    pub fn sample_length(&self) -> Option<usize> {
        self.grid_size
    }

    pub fn sample_totals(&self) -> usize {
        self.total_samples
    }

    pub fn class_totals(&self) -> &[usize] {
        &self.class_totals
    }

    /// Writes the fitted tables. Refuses without creating a file if the model is unset.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ModelResult<()> {
        let path = path.as_ref();
        if self.grid_size.is_none() {
            warn!("Could not save. Model is not valid.");
            return Err(ModelError::Unset);
        }
        let file = File::create(path).map_err(|err| {
            warn!("Cannot open file for writing: {}: {err}", path.display());
            err
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        info!("Saved model to file: {}", path.display());
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> ModelResult<()> {
        let grid_size = self.grid_size.ok_or(ModelError::Unset)?;
        writeln!(writer, "{grid_size}")?;
        for prior in &self.priors {
            writeln!(writer, "{prior}")?;
        }
        for (class, class_likelihoods) in self.likelihoods.iter().enumerate() {
            for (shade, table) in class_likelihoods.iter().enumerate() {
                writeln!(writer, "{class} {shade}")?;
                for row in table.chunks(grid_size) {
                    let line: Vec<String> = row.iter().map(|p| p.to_string()).collect();
                    writeln!(writer, "{}", line.join(" "))?;
                }
            }
        }
        Ok(())
    }

    /// Replaces the fitted tables with those in a saved model file. The model is
    /// invalidated first and stays invalid if anything goes wrong.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> ModelResult<()> {
        let path = path.as_ref();
        self.invalidate();
        let text = fs::read_to_string(path).map_err(|err| {
            warn!("Cannot open file for reading: {}: {err}", path.display());
            err
        })?;
        self.read_from_str(&text)?;
        info!("Loaded model from file: {}", path.display());
        Ok(())
    }

    pub fn read_from_str(&mut self, text: &str) -> ModelResult<()> {
        self.invalidate();
        let cfg = self.config;
        let mut tokens = text.split_whitespace();

        let grid_size: usize = next_token(&mut tokens, "grid size")?;
        if grid_size == 0 {
            return Err(ModelError::Format("grid size must be positive".to_string()));
        }
        let area = grid_size
            .checked_mul(grid_size)
            .ok_or_else(|| ModelError::Format(format!("grid size {grid_size} is too large")))?;

        let mut priors = Vec::with_capacity(cfg.num_classes());
        for class in 0..cfg.num_classes() {
            priors.push(next_token::<f64>(&mut tokens, &format!("prior {class}"))?);
        }

        // Every table needs a two-token header and `area` values.
        let tables = cfg.num_classes() * cfg.num_shades();
        let needed = area
            .checked_add(2)
            .and_then(|per_table| per_table.checked_mul(tables));
        let remaining = tokens.clone().count();
        if needed.map_or(true, |needed| needed > remaining) {
            return Err(ModelError::Format(format!(
                "grid size {grid_size} needs more likelihood values than the {remaining} tokens left"
            )));
        }

        let mut likelihoods = Vec::with_capacity(cfg.num_classes());
        for class in 0..cfg.num_classes() {
            let mut class_likelihoods = Vec::with_capacity(cfg.num_shades());
            for shade in 0..cfg.num_shades() {
                let header: (usize, usize) = (
                    next_token(&mut tokens, "class header")?,
                    next_token(&mut tokens, "shade header")?,
                );
                if header != (class, shade) {
                    return Err(ModelError::Format(format!(
                        "expected table header {class} {shade}, found {} {}",
                        header.0, header.1
                    )));
                }
                let mut table = Vec::with_capacity(area);
                for pixel in 0..area {
                    table.push(next_token::<f64>(
                        &mut tokens,
                        &format!("likelihood {class} {shade} {pixel}"),
                    )?);
                }
                class_likelihoods.push(table);
            }
            likelihoods.push(class_likelihoods);
        }

        if let Some(extra) = tokens.next() {
            return Err(ModelError::Format(format!("unexpected trailing token {extra:?}")));
        }

        self.lock_grid(grid_size);
        self.priors = priors;
        self.likelihoods = likelihoods;
        Ok(())
    }
}

fn next_token<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> ModelResult<T> {
    let token = tokens
        .next()
        .ok_or_else(|| ModelError::Format(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| ModelError::Format(format!("bad {what}: {token:?}")))
}

/// Model dump: sample total, priors, then every likelihood table. Empty when unset.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(grid_size) = self.grid_size else {
            return Ok(());
        };
        writeln!(f, "Total number of images: {}", self.total_samples)?;
        for (class, prior) in self.priors.iter().enumerate() {
            writeln!(f, "Class {class} prior: {prior}")?;
        }
        for (class, class_likelihoods) in self.likelihoods.iter().enumerate() {
            for (shade, table) in class_likelihoods.iter().enumerate() {
                writeln!(f, "c: {class} : {shade}")?;
                for row in table.chunks(grid_size) {
                    for p in row {
                        write!(f, "{p:.3} ")?;
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    // 3 and 1 on a 2x2 grid, plus a second 3
    const CORPUS: &str = "3\n##\n #\n1\n #\n #\n3\n# \n #\n";

    fn trained() -> Model {
        let mut model = Model::new();
        model.train(Cursor::new(CORPUS)).unwrap();
        model
    }

    #[test]
    fn counts_and_priors() {
        let model = trained();
        assert_eq!(model.sample_length(), Some(2));
        assert_eq!(model.sample_totals(), 3);
        assert_eq!(model.class_totals()[3], 2);
        assert!((model.prior(3).unwrap() - 3.0 / 13.0).abs() < 1e-12);
        assert!((model.prior(0).unwrap() - 1.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn likelihoods_are_smoothed() {
        let model = trained();
        // digit 3, pixel (0,1): shaded once, unshaded once
        assert!((model.likelihood(3, 1, 0, 1).unwrap() - 0.5).abs() < 1e-12);
        // digit 3, pixel (1,1): shaded twice
        assert!((model.likelihood(3, 1, 1, 1).unwrap() - 0.75).abs() < 1e-12);
        assert!((model.shade_likelihood(3, Shade::Unshaded, 1, 1).unwrap() - 0.25).abs() < 1e-12);
        assert_eq!(model.likelihood(9, 0, 0, 0).unwrap(), 0.5);
    }

    #[test]
    fn queries_are_bounds_checked() {
        let model = trained();
        assert!(matches!(model.prior(10), Err(ModelError::OutOfRange(_))));
        assert!(matches!(model.likelihood(10, 1, 0, 0), Err(ModelError::OutOfRange(_))));
        assert!(matches!(model.likelihood(0, 2, 0, 0), Err(ModelError::OutOfRange(_))));
        assert!(matches!(model.likelihood(0, 0, 2, 0), Err(ModelError::OutOfRange(_))));
        assert!(matches!(model.likelihood(0, 0, 0, 2), Err(ModelError::OutOfRange(_))));
    }

    #[test]
    fn unset_model_rejects_queries() {
        let model = Model::new();
        assert_eq!(model.sample_length(), None);
        assert!(matches!(model.prior(0), Err(ModelError::Unset)));
        assert!(matches!(model.likelihood(0, 0, 0, 0), Err(ModelError::Unset)));
        assert!(matches!(model.classify_sample(&Sample::blank(2)), Err(ModelError::Unset)));
        assert_eq!(model.to_string(), "");
    }

    #[test]
    fn mismatched_sample_poisons_the_model() {
        let mut model = Model::new();
        let err = model
            .train(Cursor::new("1\n#\n2\n##\n##\n3\n#\n"))
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                expected: 1,
                found: 2
            }
        ));
        assert_eq!(model.sample_length(), None);
        assert_eq!(model.sample_totals(), 1);
    }

    #[test]
    fn malformed_record_poisons_the_model() {
        let mut model = Model::new();
        assert!(model.train(Cursor::new("1\n# \n#\n")).is_err());
        assert_eq!(model.sample_length(), None);
    }

    #[test]
    fn retraining_after_poison_starts_from_zero() {
        let mut model = Model::new();
        assert!(model.train(Cursor::new("1\n#\n2\n##\n##\n")).is_err());
        model.train(Cursor::new(CORPUS)).unwrap();
        assert_eq!(model.sample_totals(), 3);
        assert_eq!(model.class_totals().iter().sum::<usize>(), 3);
    }

    #[test]
    fn empty_corpus_leaves_model_unset() {
        let mut model = Model::new();
        assert!(matches!(model.train(Cursor::new("")), Err(ModelError::Unset)));
        assert_eq!(model.sample_length(), None);
    }

    #[test]
    fn classifies_training_samples() {
        let model = trained();
        let mut sample = Sample::blank(2);
        sample.set_pixel(0, 1, Shade::Shaded).unwrap();
        sample.set_pixel(1, 1, Shade::Shaded).unwrap();
        assert_eq!(model.classify_sample(&sample).unwrap(), 1);

        let report = model.classify_reader(Cursor::new(CORPUS)).unwrap();
        assert_eq!(report.total(), 3);
        assert_eq!(report.digit_accuracy(1), 1.0);
        assert!(report.digit_accuracy(7).is_nan());
    }

    #[test]
    fn ties_go_to_the_lowest_digit() {
        let mut model = Model::new();
        // identical images for 4 and 6 make their scores equal
        model.train(Cursor::new("6\n#\n4\n#\n")).unwrap();
        let mut sample = Sample::blank(1);
        sample.set_pixel(0, 0, Shade::Shaded).unwrap();
        assert_eq!(model.classify_sample(&sample).unwrap(), 4);
    }

    #[test]
    fn wrong_size_sample_is_rejected() {
        let model = trained();
        assert!(matches!(
            model.classify_sample(&Sample::blank(3)),
            Err(ModelError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn serialized_model_round_trips_exactly() {
        let model = trained();
        let mut buf = Vec::new();
        model.write_to(&mut buf).unwrap();

        let mut loaded = Model::new();
        loaded.read_from_str(std::str::from_utf8(&buf).unwrap()).unwrap();
        assert_eq!(loaded.sample_length(), Some(2));
        for digit in 0..10 {
            assert_eq!(loaded.prior(digit).unwrap(), model.prior(digit).unwrap());
            for shade in 0..2 {
                for row in 0..2 {
                    for col in 0..2 {
                        assert_eq!(
                            loaded.likelihood(digit, shade, row, col).unwrap(),
                            model.likelihood(digit, shade, row, col).unwrap()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn serialized_layout_starts_with_grid_and_priors() {
        let model = trained();
        let mut buf = Vec::new();
        model.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2");
        assert_eq!(lines[11], "0 0");
        assert_eq!(lines[12].split_whitespace().count(), 2);
        // grid, 10 priors, 20 tables of header plus 2 rows
        assert_eq!(lines.len(), 1 + 10 + 20 * 3);
    }

    #[test]
    fn truncated_model_text_leaves_model_unset() {
        let mut model = trained();
        let mut buf = Vec::new();
        model.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let cut = &text[..text.len() / 2];

        assert!(matches!(model.read_from_str(cut), Err(ModelError::Format(_))));
        assert_eq!(model.sample_length(), None);
    }

    #[test]
    fn misplaced_table_header_is_rejected() {
        let model = trained();
        let mut buf = Vec::new();
        model.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap().replacen("0 1\n", "5 1\n", 1);

        let mut loaded = Model::new();
        assert!(matches!(loaded.read_from_str(&text), Err(ModelError::Format(_))));
    }

    #[test]
    fn print_is_read_only() {
        let model = trained();
        let first = model.to_string();
        assert!(first.starts_with("Total number of images: 3\n"));
        assert!(first.contains("Class 3 prior: "));
        assert!(first.contains("c: 9 : 1\n"));
        assert_eq!(model.to_string(), first);
        assert_eq!(model.sample_totals(), 3);
    }

    fn header_with_priors(grid: &str) -> String {
        let mut text = format!("{grid}\n");
        for _ in 0..10 {
            text.push_str("0.1\n");
        }
        text
    }

    #[test]
    fn oversized_grid_header_is_a_format_error() {
        let mut model = trained();
        assert!(matches!(
            model.read_from_str(&header_with_priors("4294967296")),
            Err(ModelError::Format(_))
        ));
        assert_eq!(model.sample_length(), None);

        let text = header_with_priors("1000000") + "0 0\n0.5\n";
        assert!(matches!(model.read_from_str(&text), Err(ModelError::Format(_))));
        assert_eq!(model.sample_length(), None);
    }

    #[test]
    fn wrong_size_test_sample_counts_as_a_miss() {
        let model = trained();
        let text = format!("{CORPUS}5\n###\n###\n###\n");
        let report = model.classify_reader(Cursor::new(text)).unwrap();
        assert_eq!(report.total(), 4);
        assert_eq!(report.seen(5), 1);
        assert_eq!(report.digit_accuracy(5), 0.0);
    }

    #[test]
    fn malformed_test_record_aborts_classification() {
        let model = trained();
        let text = format!("{CORPUS}1\n #\n#\n");
        assert!(matches!(
            model.classify_reader(Cursor::new(text)),
            Err(ModelError::Sample(SampleError::RaggedRow { .. }))
        ));
    }

    #[test]
    fn predict_leaves_wrong_size_prediction_empty() {
        let dir = tempfile::tempdir().unwrap();
        let inpath = dir.path().join("mixed.txt");
        let outpath = dir.path().join("predictions.csv");
        fs::write(&inpath, "1\n #\n #\n5\n###\n###\n###\n").unwrap();

        let model = trained();
        assert_eq!(model.predict(&inpath, &outpath).unwrap(), 2);

        let mut reader = csv::Reader::from_path(&outpath).unwrap();
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(rows, vec![vec!["1", "1", "1"], vec!["2", "5", ""]]);
    }

    #[test]
    fn predict_aborts_on_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let inpath = dir.path().join("ragged.txt");
        let outpath = dir.path().join("predictions.csv");
        fs::write(&inpath, "1\n #\n#\n").unwrap();

        let model = trained();
        assert!(matches!(
            model.predict(&inpath, &outpath),
            Err(ModelError::Sample(SampleError::RaggedRow { .. }))
        ));
        assert!(!outpath.exists());
    }
}
