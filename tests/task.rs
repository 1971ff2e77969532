use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use xenapi::task::{Caller, Transport, resolve, run_async, wait};
use xenapi::types::{Task, TaskStatusType, Vdi, VdiRecord, VdiType};
use xenapi::{ApiError, Error, Ref, TaskConfig, Value, value};
use xmlrpc::{Response, encode_call, encode_response, parse_response};

/// Serves canned `methodResponse` documents per method, in order. The last
/// document of a method is repeated.
#[derive(Default)]
struct CannedServer {
    responses: Mutex<HashMap<String, VecDeque<String>>>,
    requests: Mutex<Vec<String>>,
}

impl CannedServer {
    fn respond(self, method: &str, payload: Value) -> Self {
        let mut envelope = Value::structure();
        envelope.insert("Status", "Success");
        envelope.insert("Value", payload);

        self.push(method, encode_response(&Response::Success(envelope)))
    }

    fn fail(self, method: &str, description: Value) -> Self {
        let mut envelope = Value::structure();
        envelope.insert("Status", "Failure");
        envelope.insert("ErrorDescription", description);

        self.push(method, encode_response(&Response::Success(envelope)))
    }

    fn push(self, method: &str, document: String) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(document);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for CannedServer {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, Error> {
        self.requests
            .lock()
            .unwrap()
            .push(encode_call(method, &params));

        let document = {
            let mut responses = self.responses.lock().unwrap();
            match responses.get_mut(method) {
                Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
                Some(queue) => queue[0].clone(),
                None => encode_response(&Response::Fault {
                    code: -1,
                    message: format!("no canned response for {method}"),
                }),
            }
        };

        match parse_response(&document)? {
            Response::Success(value) => Ok(value),
            Response::Fault { code, message } => Err(Error::Fault { code, message }),
        }
    }
}

fn caller(server: CannedServer) -> Caller<CannedServer> {
    Caller::new(server, Ref::new("OpaqueRef:session"))
}

#[tokio::test(start_paused = true)]
async fn create_vdi_asynchronously() {
    let server = CannedServer::default()
        .respond("Async.VDI.create", value!("OpaqueRef:task1"))
        .respond("task.get_status", value!("pending"))
        .respond("task.get_status", value!("success"))
        .respond("task.get_result", value!("<value>OpaqueRef:vdi1</value>"));
    let caller = caller(server);

    let vdi: Ref<Vdi> = run_async(
        &caller,
        "VDI.create",
        vec![value!({"name_label": "scratch", "virtual_size": "1073741824"})],
        &TaskConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(vdi.handle(), "OpaqueRef:vdi1");
}

#[tokio::test]
async fn record_result_is_escaped_xml() {
    // the result of a task is a string holding a document, so it reaches
    // the client escaped once more
    let server = CannedServer::default()
        .respond("task.get_status", value!("success"))
        .respond(
            "task.get_result",
            value!(
                "<value><struct>\
                 <member><name>uuid</name><value>v1</value></member>\
                 <member><name>type</name><value>user</value></member>\
                 <member><name>virtual_size</name><value>1073741824</value></member>\
                 <member><name>name_label</name><value>a &amp; b</value></member>\
                 </struct></value>"
            ),
        );
    let caller = caller(server);

    let record: VdiRecord = resolve(&caller, &Ref::<Task>::new("OpaqueRef:task1"))
        .await
        .unwrap();
    assert_eq!(record.uuid, "v1");
    assert_eq!(record.typ, VdiType::User);
    assert_eq!(record.virtual_size, 1073741824);
    assert_eq!(record.name_label, "a & b");
}

#[tokio::test]
async fn failed_task() {
    let server = CannedServer::default()
        .respond("task.get_status", value!("failure"))
        .respond(
            "task.get_error_info",
            value!(["SR_BACKEND_FAILURE", "-1", "", "out of space"]),
        );
    let caller = caller(server);

    let err = resolve::<Ref<Vdi>, _>(&caller, &Ref::new("OpaqueRef:task1"))
        .await
        .unwrap_err();
    assert_eq!(
        err.api(),
        Some(&ApiError::SrBackendFailure {
            status: "-1".into(),
            stdout: String::new(),
            stderr: "out of space".into(),
        })
    );
}

#[tokio::test]
async fn session_is_passed_first() {
    let server = CannedServer::default().respond("task.get_status", value!("cancelling"));
    let caller = caller(server);

    let err = resolve::<Ref<Vdi>, _>(&caller, &Ref::new("OpaqueRef:task1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::TaskNotFinished(TaskStatusType::Cancelling)));

    let requests = caller_requests(&caller);
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains(
        "<param><value><string>OpaqueRef:session</string></value></param>\
         <param><value><string>OpaqueRef:task1</string></value></param>"
    ));
}

#[tokio::test]
async fn call_failure_and_fault() {
    let server = CannedServer::default().fail(
        "Async.VDI.destroy",
        value!(["VDI_IN_USE", "OpaqueRef:vdi1", "destroy"]),
    );
    let caller = caller(server);

    let err = caller
        .call_async("VDI.destroy", vec![value!("OpaqueRef:vdi1")])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), r#"VDI_IN_USE vdi="OpaqueRef:vdi1" operation="destroy""#);

    let err = caller.call("VDI.forget", vec![]).await.unwrap_err();
    assert!(matches!(err, Error::Fault { code: -1, .. }));
}

#[tokio::test(start_paused = true)]
async fn stuck_task_times_out() {
    let server = CannedServer::default().respond("task.get_status", value!("pending"));
    let caller = caller(server);
    let config = TaskConfig {
        poll_interval: Duration::from_millis(500),
        timeout: Duration::from_secs(2),
    };

    let err = wait(&caller, &Ref::new("OpaqueRef:task1"), &config)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout(_)));
    assert_eq!(caller_requests(&caller).len(), 5);
}

fn caller_requests(caller: &Caller<CannedServer>) -> Vec<String> {
    caller.transport().requests()
}
