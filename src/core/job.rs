use crate::domain::model::Device;
use crate::domain::ports::Processor;
use crate::utils::error::Result;

/// Runs one processing cycle. No retry, no loop.
pub struct JobRunner<P: Processor> {
    processor: P,
}

impl<P: Processor> JobRunner<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    pub fn run(&self) -> Result<Device> {
        tracing::info!("starting job");

        let device = self.processor.process()?;

        tracing::info!("job finished: {} {}", device.kind(), device.id());

        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DeviceType;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingProcessor {
        calls: Arc<AtomicUsize>,
    }

    impl Processor for CountingProcessor {
        fn process(&self) -> Result<Device> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Device::Laptop {
                id: "p-t-s".to_string(),
                price: 9.9,
            })
        }
    }

    #[test]
    fn test_run_invokes_processor_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let runner = JobRunner::new(CountingProcessor {
            calls: calls.clone(),
        });

        let device = runner.run().unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(device.kind(), DeviceType::Laptop);
    }
}
