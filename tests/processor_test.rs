use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use devicegen::domain::ports::{DeviceFactory, DeviceTypeSource, PriceSource, Processor};
use devicegen::{Device, DeviceError, DeviceProcessor, DeviceType, Result};

struct CountingTypeSource {
    kind: DeviceType,
    calls: Arc<AtomicUsize>,
}

impl DeviceTypeSource for CountingTypeSource {
    fn device_type(&self) -> DeviceType {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.kind
    }
}

struct CountingPriceSource {
    price: f64,
    calls: Arc<AtomicUsize>,
}

impl PriceSource for CountingPriceSource {
    fn price(&self) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.price
    }
}

struct RecordingFactory {
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(DeviceType, f64)>>>,
}

impl DeviceFactory for RecordingFactory {
    fn create_device(&self, device_type: DeviceType, price: f64) -> Result<Device> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((device_type, price));

        let id = "fake-token-id".to_string();
        let device = match device_type {
            DeviceType::Laptop => Device::Laptop { id, price },
            DeviceType::Desktop => Device::Desktop { id, price },
            DeviceType::Phone => Device::Phone { id, price },
        };

        Ok(device)
    }
}

struct FailingFactory;

impl DeviceFactory for FailingFactory {
    fn create_device(&self, device_type: DeviceType, _price: f64) -> Result<Device> {
        Err(DeviceError::UnknownDeviceTypeError {
            value: device_type.to_string(),
        })
    }
}

#[test]
fn test_process_calls_each_collaborator_exactly_once() {
    let type_calls = Arc::new(AtomicUsize::new(0));
    let price_calls = Arc::new(AtomicUsize::new(0));
    let factory_calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let processor = DeviceProcessor::new(
        CountingTypeSource {
            kind: DeviceType::Desktop,
            calls: type_calls.clone(),
        },
        CountingPriceSource {
            price: 19.9,
            calls: price_calls.clone(),
        },
        RecordingFactory {
            calls: factory_calls.clone(),
            seen: seen.clone(),
        },
    );

    let device = processor.process().unwrap();

    assert_eq!(type_calls.load(Ordering::SeqCst), 1);
    assert_eq!(price_calls.load(Ordering::SeqCst), 1);
    assert_eq!(factory_calls.load(Ordering::SeqCst), 1);

    // The factory received exactly the generated values.
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[(DeviceType::Desktop, 19.9)]
    );
    assert_eq!(device.kind(), DeviceType::Desktop);
    assert_eq!(device.price(), 19.9);
}

#[test]
fn test_factory_failure_propagates() {
    let processor = DeviceProcessor::new(
        CountingTypeSource {
            kind: DeviceType::Phone,
            calls: Arc::new(AtomicUsize::new(0)),
        },
        CountingPriceSource {
            price: 5.0,
            calls: Arc::new(AtomicUsize::new(0)),
        },
        FailingFactory,
    );

    let err = processor.process().unwrap_err();

    assert!(matches!(err, DeviceError::UnknownDeviceTypeError { .. }));
}
