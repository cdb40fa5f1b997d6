//! Concurrent aggregation: fan-out one job per multiple, fan-in the partial sums.
//!
//! Every job carries its own one-shot channel back to the fan-in stage, which
//! selects over all of them and reduces as results arrive. Workers are scoped
//! threads, so they are always joined before [`aggregate`] returns, whether
//! the call succeeds, fails, times out, or is cancelled.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Select, Sender};
use tracing::{debug, warn};

use crate::calculator::MultiplesError;
use crate::constants::WORKER_THREAD_PREFIX;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::worker::{sum_multiple_with, SumStrategy};

/// Name reported by the concurrent aggregator.
pub const ALGORITHM: &str = "Concurrent";

type PartialSum = Result<u64, MultiplesError>;

/// One unit of work: a multiple plus the channel its partial sum goes back on.
struct Job {
    multiple: u32,
    reply: Sender<PartialSum>,
}

/// Sum the sequences of every multiple up to `total` (inclusive), one worker
/// per multiple, and combine the partial sums.
///
/// With `opts.max_workers > 0` at most that many threads are spawned and they
/// pull jobs from a shared queue. A failing worker fails the whole call and
/// cancels its siblings. `opts.deadline` bounds the wait for partial sums.
pub fn aggregate(
    total: u64,
    multiples: &[u32],
    opts: &Options,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
) -> Result<u64, MultiplesError> {
    if multiples.is_empty() {
        observer.on_progress(&ProgressUpdate::done(ALGORITHM, 0));
        return Ok(0);
    }
    cancel.check_cancelled()?;

    let deadline = opts.deadline.map(|limit| (limit, Instant::now() + limit));
    let local = cancel.child();

    let (job_tx, job_rx) = crossbeam_channel::unbounded::<Job>();
    let mut receivers = Vec::with_capacity(multiples.len());
    for &multiple in multiples {
        let (reply, rx) = crossbeam_channel::bounded(1);
        job_tx
            .send(Job { multiple, reply })
            .map_err(|_| MultiplesError::Config("job queue closed".into()))?;
        receivers.push(rx);
    }
    drop(job_tx);

    let workers = opts.worker_count(multiples.len());
    // Only the workers hold the queue, so queued jobs are dropped if they all exit.
    let worker_queues: Vec<Receiver<Job>> = (0..workers).map(|_| job_rx.clone()).collect();
    drop(job_rx);

    debug!(total, jobs = multiples.len(), workers, "spawning workers");

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        let mut spawn_error = None;

        for (id, jobs) in worker_queues.into_iter().enumerate() {
            let token = local.clone();
            let strategy = opts.strategy;
            let spawned = thread::Builder::new()
                .name(format!("{WORKER_THREAD_PREFIX}-{id}"))
                .spawn_scoped(scope, move || run_worker(&jobs, total, strategy, &token));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_error = Some(MultiplesError::Config(format!(
                        "failed to spawn worker thread: {e}"
                    )));
                    break;
                }
            }
        }

        let result = match spawn_error {
            Some(e) => Err(e),
            None => fan_in(&receivers, multiples, deadline, cancel, observer),
        };

        if let Err(e) = &result {
            warn!(error = %e, "aggregation failed, cancelling remaining workers");
            local.cancel();
        }
        for handle in handles {
            if handle.join().is_err() {
                warn!("worker thread panicked");
            }
        }

        result
    })
}

fn run_worker(jobs: &Receiver<Job>, total: u64, strategy: SumStrategy, cancel: &CancellationToken) {
    for job in jobs {
        if cancel.is_cancelled() {
            // Dropping the reply sender tells the fan-in stage this job is gone.
            continue;
        }
        let partial = sum_multiple_with(job.multiple, total, strategy, cancel);
        // Capacity 1 and exactly one send per job, so this never blocks.
        let _ = job.reply.send(partial);
    }
}

fn fan_in(
    receivers: &[Receiver<PartialSum>],
    multiples: &[u32],
    deadline: Option<(Duration, Instant)>,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
) -> Result<u64, MultiplesError> {
    let expected = receivers.len() as u64;
    let mut select = Select::new();
    for rx in receivers {
        select.recv(rx);
    }

    let mut sum = 0u64;
    for completed in 1..=expected {
        let operation = match deadline {
            Some((limit, at)) => select
                .select_deadline(at)
                .map_err(|_| MultiplesError::DeadlineExceeded(limit))?,
            None => select.select(),
        };
        let index = operation.index();
        let received = operation.recv(&receivers[index]);
        select.remove(index);

        let multiple = multiples[index];
        let partial = match received {
            Ok(Ok(partial)) => partial,
            Ok(Err(MultiplesError::Cancelled)) => return Err(MultiplesError::Cancelled),
            Ok(Err(source)) => return Err(worker_failure(index, multiple, source)),
            Err(_) if cancel.is_cancelled() => return Err(MultiplesError::Cancelled),
            Err(_) => return Err(worker_failure(index, multiple, MultiplesError::Disconnected)),
        };

        debug!(index, multiple, partial, "partial sum received");
        sum = sum.checked_add(partial).ok_or(MultiplesError::Overflow)?;
        observer.on_progress(&ProgressUpdate::new(ALGORITHM, completed, expected));
    }

    observer.on_progress(&ProgressUpdate::done(ALGORITHM, expected));
    Ok(sum)
}

fn worker_failure(index: usize, multiple: u32, source: MultiplesError) -> MultiplesError {
    MultiplesError::WorkerFailure {
        index,
        multiple,
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::{ChannelObserver, NoOpObserver};

    fn run(total: u64, multiples: &[u32], opts: &Options) -> Result<u64, MultiplesError> {
        aggregate(total, multiples, opts, &CancellationToken::new(), &NoOpObserver::new())
    }

    #[test]
    fn single_multiple() {
        assert_eq!(run(20, &[3], &Options::default()), Ok(63));
    }

    #[test]
    fn several_multiples_inclusive_bound() {
        // (3+6+9) + (5+10)
        assert_eq!(run(10, &[3, 5], &Options::default()), Ok(33));
    }

    #[test]
    fn empty_multiples_spawn_nothing() {
        assert_eq!(run(10, &[], &Options::default()), Ok(0));
    }

    #[test]
    fn zero_total() {
        assert_eq!(run(0, &[1, 2, 3], &Options::default()), Ok(0));
    }

    #[test]
    fn bounded_pool_matches_unbounded() {
        let multiples: Vec<u32> = (1..=40).collect();
        let unbounded = run(10_000, &multiples, &Options::default());
        let bounded = run(
            10_000,
            &multiples,
            &Options {
                max_workers: 3,
                ..Default::default()
            },
        );
        assert!(unbounded.is_ok());
        assert_eq!(unbounded, bounded);
    }

    #[test]
    fn closed_form_strategy() {
        let opts = Options {
            strategy: SumStrategy::ClosedForm,
            ..Default::default()
        };
        assert_eq!(run(20, &[3], &opts), Ok(63));
    }

    #[test]
    fn zero_multiple_fails_whole_computation() {
        let result = run(100, &[3, 0, 5], &Options::default());
        match result {
            Err(MultiplesError::WorkerFailure {
                index,
                multiple,
                source,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(multiple, 0);
                assert!(matches!(*source, MultiplesError::InvalidArgument(_)));
            }
            other => panic!("expected worker failure, got {other:?}"),
        }
    }

    #[test]
    fn failure_with_bounded_pool_does_not_hang() {
        let mut multiples: Vec<u32> = (1..=64).collect();
        multiples[10] = 0;
        let opts = Options {
            max_workers: 2,
            ..Default::default()
        };
        let result = run(1_000_000, &multiples, &opts);
        assert!(matches!(result, Err(MultiplesError::WorkerFailure { index: 10, .. })));
    }

    #[test]
    fn overflow_in_combine() {
        let opts = Options {
            strategy: SumStrategy::ClosedForm,
            ..Default::default()
        };
        // Each partial sum fits, their sum does not.
        let total = 6_000_000_000;
        let single = run(total, &[1], &opts).unwrap();
        assert!(single > u64::MAX / 2);
        assert_eq!(run(total, &[1, 1], &opts), Err(MultiplesError::Overflow));
    }

    #[test]
    fn cancelled_before_start() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = aggregate(10, &[3], &Options::default(), &cancel, &NoOpObserver::new());
        assert_eq!(result, Err(MultiplesError::Cancelled));
    }

    #[test]
    fn deadline_exceeded_returns_no_partial_sum() {
        let opts = Options {
            deadline: Some(Duration::from_millis(1)),
            ..Default::default()
        };
        // Iterative sum of 1..=u64::MAX/4 cannot finish in a millisecond.
        let result = run(u64::MAX / 4, &[1, 2], &opts);
        assert!(matches!(result, Err(MultiplesError::DeadlineExceeded(_))));
    }

    #[test]
    fn deadline_not_hit_for_fast_work() {
        let opts = Options {
            deadline: Some(Duration::from_secs(30)),
            ..Default::default()
        };
        assert_eq!(run(20, &[3, 5], &opts), Ok(63 + 50));
    }

    #[test]
    fn observer_sees_every_completion() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let observer = ChannelObserver::new(tx);
        let result = aggregate(
            100,
            &[2, 3, 5, 7],
            &Options::default(),
            &CancellationToken::new(),
            &observer,
        );
        assert!(result.is_ok());
        let updates: Vec<ProgressUpdate> = rx.try_iter().collect();
        assert_eq!(updates.len(), 5);
        assert!(updates.last().unwrap().done);
        assert_eq!(updates[3].completed, 4);
    }
}
