use std::fmt::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quick_xml::escape::escape;
use value::Value;

use crate::Response;

const DATETIME_FORMAT: &str = "%Y%m%dT%H:%M:%SZ";

/// Builds a `methodCall` document.
pub fn encode_call(method: &str, params: &[Value]) -> String {
    let mut buf = String::with_capacity(128);

    buf.push_str(r#"<?xml version="1.0"?><methodCall><methodName>"#);
    buf.push_str(&escape(method));
    buf.push_str("</methodName><params>");
    for param in params {
        buf.push_str("<param>");
        encode_value(param, &mut buf);
        buf.push_str("</param>");
    }
    buf.push_str("</params></methodCall>");

    buf
}

/// Builds a `methodResponse` document, mostly useful for canned server
/// replies.
pub fn encode_response(resp: &Response) -> String {
    let mut buf = String::with_capacity(128);

    buf.push_str(r#"<?xml version="1.0"?><methodResponse>"#);
    match resp {
        Response::Success(value) => {
            buf.push_str("<params><param>");
            encode_value(value, &mut buf);
            buf.push_str("</param></params>");
        }
        Response::Fault { code, message } => {
            let mut fault = Value::structure();
            fault.insert("faultCode", *code);
            fault.insert("faultString", message.as_str());

            buf.push_str("<fault>");
            encode_value(&fault, &mut buf);
            buf.push_str("</fault>");
        }
    }
    buf.push_str("</methodResponse>");

    buf
}

/// Appends `value` as a `<value>` element.
pub fn encode_value(value: &Value, buf: &mut String) {
    buf.push_str("<value>");
    match value {
        Value::String(s) => {
            buf.push_str("<string>");
            buf.push_str(&escape(s.as_str()));
            buf.push_str("</string>");
        }
        Value::Integer(i) => {
            let _ = write!(buf, "<i8>{i}</i8>");
        }
        Value::Double(f) => {
            let _ = write!(buf, "<double>{f}</double>");
        }
        Value::Boolean(b) => {
            buf.push_str(if *b {
                "<boolean>1</boolean>"
            } else {
                "<boolean>0</boolean>"
            });
        }
        Value::DateTime(ts) => {
            let _ = write!(
                buf,
                "<dateTime.iso8601>{}</dateTime.iso8601>",
                ts.format(DATETIME_FORMAT)
            );
        }
        Value::Base64(b) => {
            buf.push_str("<base64>");
            buf.push_str(&STANDARD.encode(b));
            buf.push_str("</base64>");
        }
        Value::Array(array) => {
            buf.push_str("<array><data>");
            for item in array {
                encode_value(item, buf);
            }
            buf.push_str("</data></array>");
        }
        Value::Struct(map) => {
            buf.push_str("<struct>");
            for (key, value) in map {
                buf.push_str("<member><name>");
                buf.push_str(&escape(key.as_str()));
                buf.push_str("</name>");
                encode_value(value, buf);
                buf.push_str("</member>");
            }
            buf.push_str("</struct>");
        }
        Value::Null => buf.push_str("<nil/>"),
    }
    buf.push_str("</value>");
}
