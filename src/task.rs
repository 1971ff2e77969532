//! Asynchronous calls.
//!
//! Calling `Async.<method>` returns a task handle right away. Once the task
//! has finished, its result is an XML-RPC `<value>` document stored as a
//! plain string on the task, or the error that made it fail.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};
use value::Value;

use crate::config::TaskConfig;
use crate::decode::Decode;
use crate::error::Error;
use crate::failure::{ApiError, check_response};
use crate::reference::Ref;
use crate::types::{Session, Task, TaskStatusType};

static VALUE_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*<value>(.*)</value>\s*$").unwrap());

/// Carries one call to the server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues `method` and returns the response envelope as is, including
    /// failure envelopes.
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, Error>;
}

/// Issues calls on behalf of one session.
pub struct Caller<T> {
    transport: T,
    session: Ref<Session>,
}

impl<T: Transport> Caller<T> {
    pub fn new(transport: T, session: Ref<Session>) -> Self {
        Caller { transport, session }
    }

    pub fn session(&self) -> &Ref<Session> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Calls `method` with the session prepended to `params`, and returns
    /// the payload of a successful response.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, Error> {
        let mut args = Vec::with_capacity(params.len() + 1);
        args.push(Value::from(&self.session));
        args.extend(params);

        let response = self.transport.call(method, args).await?;
        check_response(response)
    }

    pub async fn call_decode<R: Decode>(&self, method: &str, params: Vec<Value>) -> Result<R, Error> {
        let value = self.call(method, params).await?;
        Ok(R::decode(&value)?)
    }

    /// Starts `method` as a task.
    pub async fn call_async(&self, method: &str, params: Vec<Value>) -> Result<Ref<Task>, Error> {
        self.call_decode(&format!("Async.{method}"), params).await
    }
}

/// Extracts the value stored as a task's result.
///
/// The whole result must be one `<value>` element. Its content is either
/// bare text, which is how handles are stored, or typed XML-RPC content.
pub fn parse_async_result(result: &str) -> Result<Value, Error> {
    let Some(inner) = VALUE_WRAPPER
        .captures(result)
        .and_then(|captures| captures.get(1))
    else {
        return Err(Error::BadAsyncResult(result.to_string()));
    };

    xmlrpc::parse_value_content(inner.as_str()).map_err(|err| {
        debug!(message = "parse async result failed", %err);
        Error::BadAsyncResult(result.to_string())
    })
}

/// Reads the outcome of a finished task.
///
/// A task that failed or was cancelled surfaces the error recorded on it,
/// a task that has not finished yet is an error too.
pub async fn resolve<R, T>(caller: &Caller<T>, task: &Ref<Task>) -> Result<R, Error>
where
    R: Decode,
    T: Transport,
{
    let status: TaskStatusType = caller
        .call_decode("task.get_status", vec![task.into()])
        .await?;

    match status {
        TaskStatusType::Success => {
            let result: String = caller
                .call_decode("task.get_result", vec![task.into()])
                .await?;
            let value = parse_async_result(&result)?;

            Ok(R::decode(&value)?)
        }
        TaskStatusType::Failure | TaskStatusType::Cancelled => {
            let info: Vec<String> = caller
                .call_decode("task.get_error_info", vec![task.into()])
                .await?;

            let err = if info.is_empty() && status == TaskStatusType::Cancelled {
                ApiError::TaskCancelled {
                    task: task.handle().to_string(),
                }
            } else {
                ApiError::from_description(&info)
            };

            debug!(message = "task failed", %task, %status, code = err.code());

            Err(Error::Api(err))
        }
        status => Err(Error::TaskNotFinished(status)),
    }
}

/// Polls `task` until it reaches a terminal status.
pub async fn wait<T: Transport>(
    caller: &Caller<T>,
    task: &Ref<Task>,
    config: &TaskConfig,
) -> Result<TaskStatusType, Error> {
    let deadline = Instant::now() + config.timeout;

    loop {
        let status: TaskStatusType = caller
            .call_decode("task.get_status", vec![task.into()])
            .await?;
        if status.is_terminal() {
            debug!(message = "task finished", %task, %status);
            return Ok(status);
        }

        let now = Instant::now();
        if now >= deadline {
            warn!(
                message = "task did not finish in time",
                %task,
                %status,
                timeout = ?config.timeout,
            );

            return Err(Error::Timeout(config.timeout));
        }

        sleep(config.poll_interval.min(deadline - now)).await;
    }
}

/// Starts `method` as a task, waits for it and decodes its result.
pub async fn run_async<R, T>(
    caller: &Caller<T>,
    method: &str,
    params: Vec<Value>,
    config: &TaskConfig,
) -> Result<R, Error>
where
    R: Decode,
    T: Transport,
{
    let task = caller.call_async(method, params).await?;
    debug!(message = "task started", method, %task);

    wait(caller, &task, config).await?;
    resolve(caller, &task).await
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use value::value;

    use super::*;
    use crate::types::{Vm, VmRecord};

    fn success(payload: Value) -> Value {
        let mut envelope = Value::structure();
        envelope.insert("Status", "Success");
        envelope.insert("Value", payload);
        envelope
    }

    /// Answers task calls from canned data. The last status repeats.
    struct MockTransport {
        statuses: Mutex<VecDeque<&'static str>>,
        result: &'static str,
        error_info: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl MockTransport {
        fn new(statuses: &[&'static str]) -> Self {
            MockTransport {
                statuses: Mutex::new(statuses.iter().copied().collect()),
                result: "",
                error_info: vec![],
                calls: Mutex::new(vec![]),
            }
        }

        fn with_result(mut self, result: &'static str) -> Self {
            self.result = result;
            self
        }

        fn with_error_info(mut self, info: &[&'static str]) -> Self {
            self.error_info = info.to_vec();
            self
        }

        fn count(&self, method: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.as_str() == method)
                .count()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, Error> {
            assert_eq!(params[0], value!("OpaqueRef:session"));
            self.calls.lock().unwrap().push(method.to_string());

            let payload = match method {
                "Async.VM.clone" => value!("OpaqueRef:task1"),
                "task.get_status" => {
                    let mut statuses = self.statuses.lock().unwrap();
                    let status = if statuses.len() > 1 {
                        statuses.pop_front().unwrap()
                    } else {
                        statuses[0]
                    };
                    Value::from(status)
                }
                "task.get_result" => Value::from(self.result),
                "task.get_error_info" => {
                    Value::Array(self.error_info.iter().map(|s| Value::from(*s)).collect())
                }
                _ => {
                    return Ok(value!({
                        "Status": "Failure",
                        "ErrorDescription": ["MESSAGE_METHOD_UNKNOWN"],
                    }));
                }
            };

            Ok(success(payload))
        }
    }

    fn caller(transport: MockTransport) -> Caller<MockTransport> {
        Caller::new(transport, Ref::new("OpaqueRef:session"))
    }

    fn task() -> Ref<Task> {
        Ref::new("OpaqueRef:task1")
    }

    #[test]
    fn wrapper_is_required() {
        assert_eq!(
            parse_async_result("<value>OpaqueRef:vm1</value>").unwrap(),
            value!("OpaqueRef:vm1")
        );
        assert_eq!(
            parse_async_result("\n<value><array><data><value>a</value></data></array></value>\n")
                .unwrap(),
            value!(["a"])
        );

        for result in [
            "OpaqueRef:vm1",
            "",
            "<value>OpaqueRef:vm1",
            "<value>a</value><value>b</value>",
            "<struct></struct>",
        ] {
            let err = parse_async_result(result).unwrap_err();
            assert!(matches!(err, Error::BadAsyncResult(ref r) if r == result), "{err}");
        }
    }

    #[tokio::test]
    async fn resolve_reference() {
        let caller = caller(MockTransport::new(&["success"]).with_result("<value>OpaqueRef:vm1</value>"));

        let vm: Ref<Vm> = resolve(&caller, &task()).await.unwrap();
        assert_eq!(vm.handle(), "OpaqueRef:vm1");
    }

    #[tokio::test]
    async fn resolve_record() {
        let caller = caller(MockTransport::new(&["success"]).with_result(
            "<value><struct>\
             <member><name>uuid</name><value>u1</value></member>\
             <member><name>name_label</name><value>box1</value></member>\
             </struct></value>",
        ));

        let record: VmRecord = resolve(&caller, &task()).await.unwrap();
        assert_eq!(record.uuid, "u1");
        assert_eq!(record.name_label, "box1");
    }

    #[tokio::test]
    async fn failed_task_surfaces_its_error() {
        let caller = caller(
            MockTransport::new(&["failure"])
                .with_error_info(&["VM_BAD_POWER_STATE", "OpaqueRef:vm1", "halted", "running"]),
        );

        let err = resolve::<Ref<Vm>, _>(&caller, &task()).await.unwrap_err();
        assert_eq!(
            err.api(),
            Some(&ApiError::VmBadPowerState {
                vm: "OpaqueRef:vm1".into(),
                expected: "halted".into(),
                actual: "running".into(),
            })
        );
        assert_eq!(caller.transport.count("task.get_result"), 0);
    }

    #[tokio::test]
    async fn cancelled_task_without_info() {
        let caller = caller(MockTransport::new(&["cancelled"]));

        let err = resolve::<Ref<Vm>, _>(&caller, &task()).await.unwrap_err();
        assert_eq!(
            err.api(),
            Some(&ApiError::TaskCancelled {
                task: "OpaqueRef:task1".into()
            })
        );
    }

    #[tokio::test]
    async fn pending_task_is_not_resolved() {
        let caller = caller(MockTransport::new(&["pending"]));

        let err = resolve::<Ref<Vm>, _>(&caller, &task()).await.unwrap_err();
        assert!(matches!(err, Error::TaskNotFinished(TaskStatusType::Pending)));
    }

    #[tokio::test]
    async fn malformed_result() {
        let caller = caller(MockTransport::new(&["success"]).with_result("OpaqueRef:vm1"));

        let err = resolve::<Ref<Vm>, _>(&caller, &task()).await.unwrap_err();
        assert!(matches!(err, Error::BadAsyncResult(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn run_until_finished() {
        let caller = caller(
            MockTransport::new(&["pending", "pending", "success"])
                .with_result("<value>OpaqueRef:vm2</value>"),
        );

        let vm: Ref<Vm> = run_async(
            &caller,
            "VM.clone",
            vec![value!("OpaqueRef:vm1"), value!("copy")],
            &TaskConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(vm.handle(), "OpaqueRef:vm2");
        // three polls while waiting, one more to resolve
        assert_eq!(caller.transport.count("task.get_status"), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_times_out() {
        let caller = caller(MockTransport::new(&["pending"]));
        let config = TaskConfig {
            poll_interval: Duration::from_secs(1),
            timeout: Duration::from_secs(5),
        };

        let err = wait(&caller, &task(), &config).await.unwrap_err();
        assert!(matches!(err, Error::Timeout(timeout) if timeout == config.timeout));
        assert_eq!(caller.transport.count("task.get_status"), 6);
    }

    #[tokio::test]
    async fn call_checks_the_envelope() {
        let caller = caller(MockTransport::new(&["success"]));

        let err = caller.call("VM.get_all", vec![]).await.unwrap_err();
        assert!(matches!(err.api(), Some(ApiError::MessageMethodUnknown { .. })));
    }
}
