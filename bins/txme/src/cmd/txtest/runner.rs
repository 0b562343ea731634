use forktx::{ChainConfig, TestSuite};
use indicatif::{ProgressBar, ProgressDrawTarget};
use serde_json::json;
use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex, PoisonError,
    },
    time::Instant,
};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Error that occurs during test execution
#[derive(Debug, Error)]
#[error("Path: {path}\nName: {name}\nError: {kind}")]
pub struct TestError {
    /// Test or step that failed.
    pub name: String,
    /// File the failure belongs to.
    pub path: String,
    /// What went wrong.
    pub kind: TestErrorKind,
}

/// Specific kind of error that occurred during test execution
#[derive(Debug, Error)]
pub enum TestErrorKind {
    /// A record failed its checks.
    #[error(transparent)]
    Failed(#[from] forktx::TestError),
    /// The file is not a test suite.
    #[error(transparent)]
    SerdeDeserialize(#[from] serde_json::Error),
    /// Reading a file or spawning a worker failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A worker panicked.
    #[error("thread panicked")]
    Panic,
    /// Failures collected with `--keep-going`.
    #[error("{n_errors} of {n_files} test files failed")]
    Failures {
        /// Failed files.
        n_errors: usize,
        /// Files run.
        n_files: usize,
    },
    /// A given path does not exist.
    #[error("path does not exist")]
    InvalidPath,
    /// A given directory holds no `.json` files.
    #[error("no JSON test files found in path")]
    NoJsonFiles,
}

/// Find all JSON test files in the given path
/// If path is a file, returns it in a vector
/// If path is a directory, recursively finds all .json files
pub(crate) fn find_all_json_tests(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        let mut files: Vec<_> = WalkDir::new(path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension() == Some("json".as_ref()))
            .map(DirEntry::into_path)
            .collect();
        files.sort();
        files
    }
}

/// Runs every record of the suite at `path`, returning the first failure.
pub(crate) fn execute_test_suite(
    path: &Path,
    config: &ChainConfig,
    print_json_outcome: bool,
) -> Result<usize, TestError> {
    let path_str = path.display().to_string();
    let error = |name: &str, kind: TestErrorKind| TestError {
        name: name.to_string(),
        path: path_str.clone(),
        kind,
    };

    let json = std::fs::read_to_string(path).map_err(|e| error("Read", e.into()))?;
    let suite: TestSuite =
        serde_json::from_str(&json).map_err(|e| error("Unknown", e.into()))?;

    for (name, test) in &suite.0 {
        let result = forktx::run(test, config);
        debug!(test = %name, passed = result.is_ok(), "finished record");

        if print_json_outcome {
            let outcome = json!({
                "name": name,
                "path": path_str,
                "pass": result.is_ok(),
                "fork": result.as_ref().err().and_then(forktx::TestError::fork),
                "error": result.as_ref().err().map(ToString::to_string),
            });
            eprintln!("{outcome}");
        }

        result.map_err(|e| error(name, e.into()))?;
    }
    Ok(suite.0.len())
}

#[derive(Clone, Copy)]
struct TestRunnerConfig {
    single_thread: bool,
    print_outcome: bool,
    keep_going: bool,
}

impl TestRunnerConfig {
    fn new(single_thread: bool, print_outcome: bool, keep_going: bool) -> Self {
        // print_outcome implies single_thread
        let single_thread = single_thread || print_outcome;

        Self {
            single_thread,
            print_outcome,
            keep_going,
        }
    }
}

#[derive(Clone)]
struct TestRunnerState {
    n_errors: Arc<AtomicUsize>,
    n_records: Arc<AtomicUsize>,
    console_bar: Arc<ProgressBar>,
    queue: Arc<Mutex<(usize, Vec<PathBuf>)>>,
    chain_config: ChainConfig,
}

impl TestRunnerState {
    fn new(test_files: Vec<PathBuf>, chain_config: ChainConfig, print_outcome: bool) -> Self {
        let n_files = test_files.len();
        let draw_target = if print_outcome {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stdout()
        };
        Self {
            n_errors: Arc::new(AtomicUsize::new(0)),
            n_records: Arc::new(AtomicUsize::new(0)),
            console_bar: Arc::new(ProgressBar::with_draw_target(
                Some(n_files as u64),
                draw_target,
            )),
            queue: Arc::new(Mutex::new((0usize, test_files))),
            chain_config,
        }
    }

    fn next_test(&self) -> Option<PathBuf> {
        let mut guard = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        let (current_idx, queue) = &mut *guard;
        let idx = *current_idx;
        let test_path = queue.get(idx).cloned()?;
        *current_idx = idx + 1;
        Some(test_path)
    }
}

fn run_test_worker(state: TestRunnerState, config: TestRunnerConfig) -> Result<(), TestError> {
    loop {
        if !config.keep_going && state.n_errors.load(Ordering::SeqCst) > 0 {
            return Ok(());
        }

        let Some(test_path) = state.next_test() else {
            return Ok(());
        };

        let result = execute_test_suite(&test_path, &state.chain_config, config.print_outcome);

        state.console_bar.inc(1);

        match result {
            Ok(n_records) => {
                state.n_records.fetch_add(n_records, Ordering::SeqCst);
            }
            Err(err) => {
                state.n_errors.fetch_add(1, Ordering::SeqCst);
                if !config.keep_going {
                    return Err(err);
                }
                state.console_bar.println(err.to_string());
            }
        }
    }
}

fn determine_thread_count(single_thread: bool, n_files: usize) -> usize {
    match (single_thread, std::thread::available_parallelism()) {
        (true, _) | (false, Err(_)) => 1,
        (false, Ok(n)) => n.get().min(n_files),
    }
}

/// Run all test files in parallel or single-threaded mode
///
/// # Arguments
/// * `test_files` - List of test files to execute
/// * `chain_config` - Chain configuration fork rules are resolved against
/// * `single_thread` - Force single-threaded execution
/// * `print_outcome` - Print test outcomes in JSON format
/// * `keep_going` - Continue running tests even if some fail
pub(crate) fn run(
    test_files: Vec<PathBuf>,
    chain_config: ChainConfig,
    single_thread: bool,
    print_outcome: bool,
    keep_going: bool,
) -> Result<(), TestError> {
    let config = TestRunnerConfig::new(single_thread, print_outcome, keep_going);
    let n_files = test_files.len();
    let state = TestRunnerState::new(test_files, chain_config, config.print_outcome);
    let num_threads = determine_thread_count(config.single_thread, n_files);
    let start = Instant::now();
    info!(n_files, num_threads, "running transaction tests");

    // Spawn worker threads
    let mut handles = Vec::with_capacity(num_threads);
    for i in 0..num_threads {
        let state = state.clone();

        let thread = std::thread::Builder::new()
            .name(format!("runner-{i}"))
            .spawn(move || run_test_worker(state, config))
            .map_err(|e| TestError {
                name: format!("thread {i} spawn"),
                path: String::new(),
                kind: e.into(),
            })?;

        handles.push(thread);
    }

    // The first worker error wins, later ones are usually the same failure.
    let mut first_error = None;
    for (i, handle) in handles.into_iter().enumerate() {
        let error = match handle.join() {
            Ok(Ok(())) => continue,
            Ok(Err(e)) => e,
            Err(_) => TestError {
                name: format!("thread {i} panicked"),
                path: String::new(),
                kind: TestErrorKind::Panic,
            },
        };
        first_error.get_or_insert(error);
    }

    state.console_bar.finish();

    let n_errors = state.n_errors.load(Ordering::SeqCst);
    println!(
        "Finished execution. Checked {} records in {:.6}s",
        state.n_records.load(Ordering::SeqCst),
        start.elapsed().as_secs_f64()
    );

    if let Some(error) = first_error {
        return Err(error);
    }
    if n_errors > 0 {
        return Err(TestError {
            name: "Summary".to_string(),
            path: String::new(),
            kind: TestErrorKind::Failures { n_errors, n_files },
        });
    }
    println!("All tests passed!");
    Ok(())
}
