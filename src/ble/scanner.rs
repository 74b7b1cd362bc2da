//! BLE scanning glue.
//!
//! Thin adapter between the platform radio stack and the decode core: it
//! watches adapter events, converts peripheral properties into
//! [`DiscoveryEvent`]s, and broadcasts them. No connections, no pairing,
//! no memory of previously seen devices.

use btleplug::api::{Central, Manager as _, Peripheral as _, ScanFilter};
use btleplug::platform::{Adapter, Manager};
use futures::stream::StreamExt;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, info, trace};

use crate::error::{Error, Result};
use crate::report::{keys, DiscoveryEvent, FieldValue};

/// BLE scanner broadcasting one [`DiscoveryEvent`] per advertisement seen.
pub struct BleScanner {
    /// The BLE adapter to use for scanning.
    adapter: Adapter,
    /// Whether scanning is currently active.
    is_scanning: Arc<RwLock<bool>>,
    /// Channel for discovery events.
    event_tx: broadcast::Sender<DiscoveryEvent>,
    /// Handle to the scanning task.
    scan_handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl BleScanner {
    /// Create a new BLE scanner on the first available adapter.
    ///
    /// # Errors
    ///
    /// Returns an error if Bluetooth is not available.
    pub async fn new() -> Result<Self> {
        let manager = Manager::new()
            .await
            .map_err(|_e| Error::BluetoothUnavailable)?;

        let adapters = manager.adapters().await.map_err(Error::Bluetooth)?;

        let adapter = adapters
            .into_iter()
            .next()
            .ok_or(Error::BluetoothUnavailable)?;

        info!(
            "Using Bluetooth adapter: {:?}",
            adapter.adapter_info().await.ok()
        );

        let (event_tx, _) = broadcast::channel(100);

        Ok(Self {
            adapter,
            is_scanning: Arc::new(RwLock::new(false)),
            event_tx,
            scan_handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Create a new BLE scanner with a specific adapter.
    pub fn with_adapter(adapter: Adapter) -> Self {
        let (event_tx, _) = broadcast::channel(100);

        Self {
            adapter,
            is_scanning: Arc::new(RwLock::new(false)),
            event_tx,
            scan_handle: Arc::new(RwLock::new(None)),
        }
    }

    /// Start an unfiltered scan.
    ///
    /// # Errors
    ///
    /// Returns an error if scanning cannot be started.
    pub async fn start_scanning(&self) -> Result<()> {
        if *self.is_scanning.read() {
            debug!("Already scanning, ignoring start request");
            return Ok(());
        }

        info!("Starting BLE advertisement scan");

        self.adapter
            .start_scan(ScanFilter::default())
            .await
            .map_err(Error::Bluetooth)?;

        *self.is_scanning.write() = true;

        let adapter = self.adapter.clone();
        let is_scanning = self.is_scanning.clone();
        let event_tx = self.event_tx.clone();

        let handle = tokio::spawn(async move {
            let mut events = match adapter.events().await {
                Ok(events) => events,
                Err(e) => {
                    error!("Failed to get adapter events: {}", e);
                    return;
                }
            };

            while *is_scanning.read() {
                tokio::select! {
                    Some(event) = events.next() => {
                        Self::handle_event(event, &adapter, &event_tx).await;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(100)) => {
                        if !*is_scanning.read() {
                            break;
                        }
                    }
                }
            }

            debug!("Scan event loop ended");
        });

        *self.scan_handle.write() = Some(handle);

        Ok(())
    }

    /// Stop scanning.
    pub async fn stop_scanning(&self) -> Result<()> {
        if !*self.is_scanning.read() {
            debug!("Not scanning, ignoring stop request");
            return Ok(());
        }

        info!("Stopping BLE scan");

        *self.is_scanning.write() = false;

        self.adapter.stop_scan().await.map_err(Error::Bluetooth)?;

        if let Some(handle) = self.scan_handle.write().take() {
            let _ = handle.await;
        }

        Ok(())
    }

    /// Check if currently scanning.
    pub fn is_scanning(&self) -> bool {
        *self.is_scanning.read()
    }

    /// Subscribe to discovery events.
    pub fn subscribe(&self) -> broadcast::Receiver<DiscoveryEvent> {
        self.event_tx.subscribe()
    }

    /// Get the underlying adapter.
    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// Handle a BLE central event.
    async fn handle_event(
        event: btleplug::api::CentralEvent,
        adapter: &Adapter,
        event_tx: &broadcast::Sender<DiscoveryEvent>,
    ) {
        use btleplug::api::CentralEvent;

        match event {
            CentralEvent::DeviceDiscovered(id) => {
                trace!("Device discovered: {:?}", id);
                Self::process_peripheral(adapter, id, event_tx).await;
            }
            CentralEvent::DeviceUpdated(id) => {
                trace!("Device updated: {:?}", id);
                Self::process_peripheral(adapter, id, event_tx).await;
            }
            CentralEvent::ManufacturerDataAdvertisement { id, .. } => {
                trace!("Manufacturer data advertisement: {:?}", id);
                Self::process_peripheral(adapter, id, event_tx).await;
            }
            CentralEvent::ServiceDataAdvertisement { id, .. } => {
                trace!("Service data advertisement: {:?}", id);
                Self::process_peripheral(adapter, id, event_tx).await;
            }
            CentralEvent::ServicesAdvertisement { id, .. } => {
                trace!("Services advertisement: {:?}", id);
                Self::process_peripheral(adapter, id, event_tx).await;
            }
            CentralEvent::DeviceConnected(id) => {
                debug!("Device connected: {:?}", id);
            }
            CentralEvent::DeviceDisconnected(id) => {
                debug!("Device disconnected: {:?}", id);
            }
            CentralEvent::StateUpdate(_) => {}
        }
    }

    /// Convert a peripheral's current properties into a discovery event.
    async fn process_peripheral(
        adapter: &Adapter,
        id: btleplug::platform::PeripheralId,
        event_tx: &broadcast::Sender<DiscoveryEvent>,
    ) {
        let peripheral = match adapter.peripheral(&id).await {
            Ok(p) => p,
            Err(e) => {
                trace!("Failed to get peripheral: {}", e);
                return;
            }
        };

        let properties = match peripheral.properties().await {
            Ok(Some(p)) => p,
            _ => return,
        };

        // A report without signal strength is not worth printing.
        let Some(rssi) = properties.rssi else {
            trace!("No RSSI for {:?}, skipping", id);
            return;
        };

        let mut fields: BTreeMap<String, FieldValue> = BTreeMap::new();

        if let Some(name) = &properties.local_name {
            fields.insert(keys::LOCAL_NAME.to_string(), FieldValue::Text(name.clone()));
        }

        // The platform hands manufacturer data pre-split by company id;
        // reassemble the on-air blob (id little-endian, then payload) so the
        // decoder sees what the radio saw. With more than one company in a
        // packet, take the lowest id for determinism.
        if let Some((company_id, payload)) = properties
            .manufacturer_data
            .iter()
            .min_by_key(|(company_id, _)| **company_id)
        {
            let mut raw = Vec::with_capacity(2 + payload.len());
            raw.extend_from_slice(&company_id.to_le_bytes());
            raw.extend_from_slice(payload);
            fields.insert(keys::MANUFACTURER_DATA.to_string(), FieldValue::Bytes(raw));
        }

        if !properties.services.is_empty() {
            fields.insert(
                keys::SERVICE_UUIDS.to_string(),
                FieldValue::Uuids(properties.services.clone()),
            );
        }

        if !properties.service_data.is_empty() {
            let map: BTreeMap<_, _> = properties
                .service_data
                .iter()
                .map(|(uuid, data)| (*uuid, data.clone()))
                .collect();
            fields.insert(keys::SERVICE_DATA.to_string(), FieldValue::DataMap(map));
        }

        if let Some(level) = properties.tx_power_level {
            fields.insert(
                keys::TX_POWER_LEVEL.to_string(),
                FieldValue::Int(i64::from(level)),
            );
        }

        let event = DiscoveryEvent {
            peer_id: id.to_string(),
            name: properties.local_name,
            rssi,
            fields,
        };

        let _ = event_tx.send(event);
    }
}

impl Drop for BleScanner {
    fn drop(&mut self) {
        *self.is_scanning.write() = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_event_clone() {
        // Just verify the struct is Clone so broadcast can fan it out.
        fn assert_clone<T: Clone>() {}
        assert_clone::<DiscoveryEvent>();
    }
}
