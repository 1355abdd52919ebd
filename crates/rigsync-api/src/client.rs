// Typed device client over any `RemoteGateway`.
//
// Encodes arguments, bounds every call by its timeout, and decodes the
// result. One method per remote operation; no retries.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::Error;
use crate::gateway::{Method, RemoteGateway};
use crate::types::{
    AccessibleFolder, EthernetInterfaceSettings, FileDownloadRequest, FileUploadRequest,
    GadgetSettings, RunningHidJob, StringMessage, TriggerActionSet, WifiSettings,
    WifiSettingsStorageRequest, WifiState,
};

/// Cheaply cloneable typed facade over a shared [`RemoteGateway`].
#[derive(Clone)]
pub struct DeviceClient {
    gateway: Arc<dyn RemoteGateway>,
}

impl DeviceClient {
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        Self { gateway }
    }

    /// Issue one call and decode its result.
    ///
    /// The timeout is enforced here regardless of whether the gateway
    /// honours it, so a stalled transport surfaces as [`Error::Timeout`].
    pub async fn call<A, T>(&self, method: Method, args: &A, timeout: Duration) -> Result<T, Error>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let args = serde_json::to_value(args).map_err(|e| Error::Deserialization {
            method,
            message: format!("encoding arguments: {e}"),
            body: String::new(),
        })?;

        trace!(%method, ?timeout, "rpc call");
        let value = tokio::time::timeout(timeout, self.gateway.call(method, args, timeout))
            .await
            .map_err(|_| Error::timeout(method, timeout))??;

        decode(method, value)
    }

    // ── USB gadget ───────────────────────────────────────────────────

    pub async fn get_deployed_gadget_settings(
        &self,
        timeout: Duration,
    ) -> Result<GadgetSettings, Error> {
        self.call(Method::GetDeployedGadgetSettings, &(), timeout).await
    }

    /// Stage settings on the device. The device validates them here;
    /// staging is not deploying.
    pub async fn set_gadget_settings(
        &self,
        settings: &GadgetSettings,
        timeout: Duration,
    ) -> Result<(), Error> {
        self.call::<_, Value>(Method::SetGadgetSettings, settings, timeout)
            .await
            .map(drop)
    }

    /// Deploy the previously staged settings, returning what is now live.
    pub async fn deploy_gadget_settings(&self, timeout: Duration) -> Result<GadgetSettings, Error> {
        self.call(Method::DeployGadgetSettings, &(), timeout).await
    }

    // ── Ethernet interfaces ─────────────────────────────────────────

    pub async fn get_all_deployed_ethernet_interface_settings(
        &self,
        timeout: Duration,
    ) -> Result<Vec<EthernetInterfaceSettings>, Error> {
        self.call(Method::GetAllDeployedEthernetInterfaceSettings, &(), timeout)
            .await
    }

    pub async fn deploy_ethernet_interface_settings(
        &self,
        settings: &EthernetInterfaceSettings,
        timeout: Duration,
    ) -> Result<(), Error> {
        self.call::<_, Value>(Method::DeployEthernetInterfaceSettings, settings, timeout)
            .await
            .map(drop)
    }

    // ── WiFi ─────────────────────────────────────────────────────────

    pub async fn get_wifi_state(&self, timeout: Duration) -> Result<WifiState, Error> {
        self.call(Method::GetWifiState, &(), timeout).await
    }

    pub async fn deploy_wifi_settings(
        &self,
        settings: &WifiSettings,
        timeout: Duration,
    ) -> Result<WifiState, Error> {
        self.call(Method::DeployWifiSettings, settings, timeout).await
    }

    pub async fn store_wifi_settings(
        &self,
        request: &WifiSettingsStorageRequest,
        timeout: Duration,
    ) -> Result<(), Error> {
        self.call::<_, Value>(Method::StoreWifiSettings, request, timeout)
            .await
            .map(drop)
    }

    pub async fn get_stored_wifi_settings(
        &self,
        name: &str,
        timeout: Duration,
    ) -> Result<WifiSettings, Error> {
        self.call(
            Method::GetStoredWifiSettings,
            &StringMessage::from(name),
            timeout,
        )
        .await
    }

    pub async fn list_stored_wifi_settings(&self, timeout: Duration) -> Result<Vec<String>, Error> {
        self.call(Method::ListStoredWifiSettings, &(), timeout).await
    }

    // ── HID jobs ─────────────────────────────────────────────────────

    pub async fn get_running_hid_jobs(
        &self,
        timeout: Duration,
    ) -> Result<Vec<RunningHidJob>, Error> {
        self.call(Method::GetRunningHidJobStates, &(), timeout).await
    }

    // ── Trigger actions ──────────────────────────────────────────────

    pub async fn get_deployed_trigger_action_set(
        &self,
        timeout: Duration,
    ) -> Result<TriggerActionSet, Error> {
        self.call(Method::GetDeployedTriggerActionSet, &(), timeout)
            .await
    }

    pub async fn deploy_trigger_action_set_replace(
        &self,
        set: &TriggerActionSet,
        timeout: Duration,
    ) -> Result<TriggerActionSet, Error> {
        self.call(Method::DeployTriggerActionSetReplace, set, timeout)
            .await
    }

    pub async fn deploy_trigger_action_set_add(
        &self,
        set: &TriggerActionSet,
        timeout: Duration,
    ) -> Result<TriggerActionSet, Error> {
        self.call(Method::DeployTriggerActionSetAdd, set, timeout).await
    }

    pub async fn deploy_trigger_action_set_remove(
        &self,
        set: &TriggerActionSet,
        timeout: Duration,
    ) -> Result<TriggerActionSet, Error> {
        self.call(Method::DeployTriggerActionSetRemove, set, timeout)
            .await
    }

    pub async fn deploy_stored_trigger_action_set_replace(
        &self,
        name: &str,
        timeout: Duration,
    ) -> Result<TriggerActionSet, Error> {
        self.call(
            Method::DeployStoredTriggerActionSetReplace,
            &StringMessage::from(name),
            timeout,
        )
        .await
    }

    pub async fn deploy_stored_trigger_action_set_add(
        &self,
        name: &str,
        timeout: Duration,
    ) -> Result<TriggerActionSet, Error> {
        self.call(
            Method::DeployStoredTriggerActionSetAdd,
            &StringMessage::from(name),
            timeout,
        )
        .await
    }

    pub async fn store_trigger_action_set(
        &self,
        set: &TriggerActionSet,
        timeout: Duration,
    ) -> Result<(), Error> {
        self.call::<_, Value>(Method::StoreTriggerActionSet, set, timeout)
            .await
            .map(drop)
    }

    pub async fn list_stored_trigger_action_sets(
        &self,
        timeout: Duration,
    ) -> Result<Vec<String>, Error> {
        self.call(Method::ListStoredTriggerActionSets, &(), timeout)
            .await
    }

    // ── Stored scripts ───────────────────────────────────────────────

    pub async fn list_stored_bash_scripts(&self, timeout: Duration) -> Result<Vec<String>, Error> {
        self.call(Method::ListStoredBashScripts, &(), timeout).await
    }

    pub async fn list_stored_hid_scripts(&self, timeout: Duration) -> Result<Vec<String>, Error> {
        self.call(Method::ListStoredHidScripts, &(), timeout).await
    }

    // ── File transfer ────────────────────────────────────────────────

    pub async fn download_file(
        &self,
        folder: AccessibleFolder,
        filename: &str,
        timeout: Duration,
    ) -> Result<String, Error> {
        let request = FileDownloadRequest {
            folder,
            filename: filename.into(),
        };
        self.call(Method::DownloadFile, &request, timeout).await
    }

    pub async fn upload_file(
        &self,
        folder: AccessibleFolder,
        filename: &str,
        content: &str,
        allow_overwrite: bool,
        timeout: Duration,
    ) -> Result<(), Error> {
        let request = FileUploadRequest {
            folder,
            filename: filename.into(),
            content: content.into(),
            allow_overwrite,
        };
        self.call::<_, Value>(Method::UploadFile, &request, timeout)
            .await
            .map(drop)
    }
}

fn decode<T: DeserializeOwned>(method: Method, value: Value) -> Result<T, Error> {
    T::deserialize(&value).map_err(|e| Error::Deserialization {
        method,
        message: e.to_string(),
        body: value.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    struct Stalled;

    #[async_trait]
    impl RemoteGateway for Stalled {
        async fn call(&self, _: Method, _: Value, _: Duration) -> Result<Value, Error> {
            std::future::pending().await
        }
    }

    struct Fixed(Value);

    #[async_trait]
    impl RemoteGateway for Fixed {
        async fn call(&self, _: Method, _: Value, _: Duration) -> Result<Value, Error> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_gateway_surfaces_as_timeout() {
        let client = DeviceClient::new(Arc::new(Stalled));
        let err = client
            .get_wifi_state(Duration::from_secs(10))
            .await
            .unwrap_err();

        assert!(err.is_timeout(), "expected timeout, got {err:?}");
        assert_eq!(err.method(), Some(Method::GetWifiState));
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_deserialization_error() {
        let client = DeviceClient::new(Arc::new(Fixed(json!({ "not": "a list" }))));
        let err = client
            .list_stored_hid_scripts(Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Deserialization {
                method: Method::ListStoredHidScripts,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unit_results_accept_null() {
        let client = DeviceClient::new(Arc::new(Fixed(Value::Null)));
        client
            .store_trigger_action_set(&TriggerActionSet::default(), Duration::from_secs(1))
            .await
            .unwrap();
    }
}
