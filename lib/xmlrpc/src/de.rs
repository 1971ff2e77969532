use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use value::Value;

use crate::{Error, Response};

/// Parses a complete `methodResponse` document.
pub fn parse_response(xml: &str) -> Result<Response, Error> {
    let mut parser = Parser::new(xml);

    parser.expect_start("methodResponse")?;
    let resp = match parser.next_tag()? {
        Tag::Start(name) if name == "params" => {
            parser.expect_start("param")?;
            let value = parser.value()?;
            parser.expect_end("param")?;
            parser.expect_end("params")?;

            Response::Success(value)
        }
        Tag::Start(name) if name == "fault" => {
            let value = parser.value()?;
            parser.expect_end("fault")?;

            fault(value)
        }
        tag => return Err(tag.unexpected()),
    };
    parser.expect_end("methodResponse")?;
    parser.expect_eof()?;

    Ok(resp)
}

/// Parses a document holding exactly one `<value>` element.
pub fn parse_value(xml: &str) -> Result<Value, Error> {
    let mut parser = Parser::new(xml);
    let value = parser.value()?;
    parser.expect_eof()?;

    Ok(value)
}

/// Parses the content of a `<value>` element without the element itself,
/// e.g. `<struct>...</struct>` or bare text.
pub fn parse_value_content(xml: &str) -> Result<Value, Error> {
    parse_value(&format!("<value>{xml}</value>"))
}

fn fault(value: Value) -> Response {
    let code = match value.get("faultCode") {
        Some(Value::Integer(code)) => *code,
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    };
    let message = value
        .get("faultString")
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Response::Fault { code, message }
}

enum Tag {
    Start(String),
    Empty(String),
    End(String),
    Eof,
}

impl Tag {
    fn unexpected(self) -> Error {
        match self {
            Tag::Start(name) | Tag::Empty(name) => Error::UnexpectedElement(name),
            Tag::End(name) => Error::UnexpectedEnd(name),
            Tag::Eof => Error::UnexpectedEof,
        }
    }
}

struct Parser<'a> {
    reader: Reader<&'a [u8]>,
}

impl<'a> Parser<'a> {
    fn new(xml: &'a str) -> Self {
        Self {
            reader: Reader::from_str(xml),
        }
    }

    /// Next structural event. Whitespace between elements, declarations,
    /// comments and processing instructions are skipped.
    fn next_tag(&mut self) -> Result<Tag, Error> {
        loop {
            match self.reader.read_event()? {
                Event::Start(e) => return Ok(Tag::Start(name(e.name().as_ref()))),
                Event::Empty(e) => return Ok(Tag::Empty(name(e.name().as_ref()))),
                Event::End(e) => return Ok(Tag::End(name(e.name().as_ref()))),
                Event::Eof => return Ok(Tag::Eof),
                Event::Text(text) => {
                    let text = std::str::from_utf8(&text)?;
                    if !text.trim().is_empty() {
                        return Err(Error::UnexpectedText(text.to_string()));
                    }
                }
                Event::CData(data) => {
                    return Err(Error::UnexpectedText(
                        String::from_utf8_lossy(&data).into_owned(),
                    ));
                }
                Event::GeneralRef(r) => {
                    return Err(Error::UnexpectedText(format!(
                        "&{};",
                        String::from_utf8_lossy(&r)
                    )));
                }
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }
    }

    fn expect_start(&mut self, want: &str) -> Result<(), Error> {
        match self.next_tag()? {
            Tag::Start(name) if name == want => Ok(()),
            tag => Err(tag.unexpected()),
        }
    }

    fn expect_end(&mut self, want: &str) -> Result<(), Error> {
        match self.next_tag()? {
            Tag::End(name) if name == want => Ok(()),
            tag => Err(tag.unexpected()),
        }
    }

    fn expect_eof(&mut self) -> Result<(), Error> {
        match self.next_tag()? {
            Tag::Eof => Ok(()),
            tag => Err(tag.unexpected()),
        }
    }

    /// Reads a whole `<value>` element, the opening tag included.
    fn value(&mut self) -> Result<Value, Error> {
        match self.next_tag()? {
            Tag::Start(name) if name == "value" => self.value_body(),
            Tag::Empty(name) if name == "value" => Ok(Value::String(String::new())),
            tag => Err(tag.unexpected()),
        }
    }

    /// Reads what follows `<value>`, up to and including `</value>`.
    /// Untyped text is a string.
    fn value_body(&mut self) -> Result<Value, Error> {
        let mut text = String::new();

        loop {
            let value = match self.reader.read_event()? {
                Event::Text(t) => {
                    text.push_str(std::str::from_utf8(&t)?);
                    continue;
                }
                Event::CData(data) => {
                    text.push_str(std::str::from_utf8(&data)?);
                    continue;
                }
                Event::GeneralRef(r) => {
                    text.push(resolve_entity(std::str::from_utf8(&r)?)?);
                    continue;
                }
                Event::Comment(_) | Event::PI(_) => continue,
                Event::End(e) if e.name().as_ref() == b"value" => {
                    return Ok(Value::String(text));
                }
                Event::End(e) => return Err(Error::UnexpectedEnd(name(e.name().as_ref()))),
                Event::Start(e) => {
                    let typ = name(e.name().as_ref());
                    self.typed(typ)?
                }
                Event::Empty(e) => empty_typed(name(e.name().as_ref()))?,
                Event::Eof => return Err(Error::UnexpectedEof),
                Event::Decl(_) | Event::DocType(_) => {
                    return Err(Error::UnexpectedText(text));
                }
            };

            if !text.trim().is_empty() {
                return Err(Error::UnexpectedText(text));
            }
            self.expect_end("value")?;

            return Ok(value);
        }
    }

    fn typed(&mut self, typ: String) -> Result<Value, Error> {
        let value = match typ.as_str() {
            "string" => Value::String(self.text("string")?),
            "i4" | "int" | "i8" => {
                let text = self.text(&typ)?;
                let i = text
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidInteger(text))?;
                Value::Integer(i)
            }
            "double" => {
                let text = self.text("double")?;
                let f = text
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidDouble(text))?;
                Value::Double(f)
            }
            "boolean" => {
                let text = self.text("boolean")?;
                match text.trim() {
                    "1" => Value::Boolean(true),
                    "0" => Value::Boolean(false),
                    _ => return Err(Error::InvalidBoolean(text)),
                }
            }
            "dateTime.iso8601" => Value::DateTime(parse_datetime(&self.text("dateTime.iso8601")?)?),
            "base64" => {
                let text = self.text("base64")?;
                let cleaned = text
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect::<String>();
                Value::Base64(Bytes::from(STANDARD.decode(cleaned)?))
            }
            "array" => self.array()?,
            "struct" => self.structure()?,
            "nil" => {
                self.expect_end("nil")?;
                Value::Null
            }
            _ => return Err(Error::UnexpectedElement(typ)),
        };

        Ok(value)
    }

    /// Collects character data up to the closing tag named `end`.
    fn text(&mut self, end: &str) -> Result<String, Error> {
        let mut text = String::new();

        loop {
            match self.reader.read_event()? {
                Event::Text(t) => text.push_str(std::str::from_utf8(&t)?),
                Event::CData(data) => text.push_str(std::str::from_utf8(&data)?),
                Event::GeneralRef(r) => text.push(resolve_entity(std::str::from_utf8(&r)?)?),
                Event::Comment(_) | Event::PI(_) => {}
                Event::End(e) => {
                    let name = name(e.name().as_ref());
                    if name == end {
                        return Ok(text);
                    }

                    return Err(Error::UnexpectedEnd(name));
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(Error::UnexpectedElement(name(e.name().as_ref())));
                }
                Event::Eof => return Err(Error::UnexpectedEof),
                Event::Decl(_) | Event::DocType(_) => {
                    return Err(Error::UnexpectedText(text));
                }
            }
        }
    }

    fn array(&mut self) -> Result<Value, Error> {
        let mut array = Vec::new();

        match self.next_tag()? {
            Tag::Start(name) if name == "data" => {}
            Tag::Empty(name) if name == "data" => {
                self.expect_end("array")?;
                return Ok(Value::Array(array));
            }
            tag => return Err(tag.unexpected()),
        }

        loop {
            match self.next_tag()? {
                Tag::Start(name) if name == "value" => array.push(self.value_body()?),
                Tag::Empty(name) if name == "value" => array.push(Value::String(String::new())),
                Tag::End(name) if name == "data" => break,
                tag => return Err(tag.unexpected()),
            }
        }
        self.expect_end("array")?;

        Ok(Value::Array(array))
    }

    fn structure(&mut self) -> Result<Value, Error> {
        let mut members = BTreeMap::new();

        loop {
            match self.next_tag()? {
                Tag::Start(name) if name == "member" => {
                    self.expect_start("name")?;
                    let key = self.text("name")?;
                    let value = self.value()?;
                    self.expect_end("member")?;

                    members.insert(key, value);
                }
                Tag::End(name) if name == "struct" => break,
                tag => return Err(tag.unexpected()),
            }
        }

        Ok(Value::Struct(members))
    }
}

fn name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn empty_typed(typ: String) -> Result<Value, Error> {
    let value = match typ.as_str() {
        "string" => Value::String(String::new()),
        "nil" => Value::Null,
        "array" => Value::Array(vec![]),
        "struct" => Value::structure(),
        "base64" => Value::Base64(Bytes::new()),
        "i4" | "int" | "i8" => return Err(Error::InvalidInteger(String::new())),
        "double" => return Err(Error::InvalidDouble(String::new())),
        "boolean" => return Err(Error::InvalidBoolean(String::new())),
        "dateTime.iso8601" => return Err(Error::InvalidDateTime(String::new())),
        _ => return Err(Error::UnexpectedElement(typ)),
    };

    Ok(value)
}

fn resolve_entity(name: &str) -> Result<char, Error> {
    let c = match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => match name.strip_prefix('#') {
            Some(num) => match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
                None => num.parse::<u32>().ok().and_then(char::from_u32),
            },
            None => None,
        },
    };

    c.ok_or_else(|| Error::InvalidEntity(name.to_string()))
}

/// XML-RPC mandates `YYYYMMDDTHH:MM:SS` without a zone, servers in the wild
/// append `Z`, an offset or fractional seconds, and some speak RFC 3339.
fn parse_datetime(text: &str) -> Result<DateTime<Utc>, Error> {
    let s = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_str(s, "%Y%m%dT%H:%M:%S%.f%z") {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    for format in ["%Y%m%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(dt.and_utc());
        }
    }

    Err(Error::InvalidDateTime(text.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use value::value;

    use super::*;

    #[test]
    fn success_response() {
        let xml = r#"<?xml version="1.0"?>
<methodResponse>
  <params>
    <param>
      <value>
        <struct>
          <member>
            <name>Status</name>
            <value>Success</value>
          </member>
          <member>
            <name>Value</name>
            <value><array><data>
              <value>OpaqueRef:a</value>
              <value><string>OpaqueRef:b</string></value>
            </data></array></value>
          </member>
        </struct>
      </value>
    </param>
  </params>
</methodResponse>"#;

        let resp = parse_response(xml).unwrap();
        assert_eq!(
            resp,
            Response::Success(value!({
                "Status": "Success",
                "Value": ["OpaqueRef:a", "OpaqueRef:b"],
            }))
        );
    }

    #[test]
    fn fault_response() {
        let xml = r#"<methodResponse><fault><value><struct>
            <member><name>faultCode</name><value><int>4</int></value></member>
            <member><name>faultString</name><value><string>Too many parameters.</string></value></member>
        </struct></value></fault></methodResponse>"#;

        assert_eq!(
            parse_response(xml).unwrap(),
            Response::Fault {
                code: 4,
                message: "Too many parameters.".to_string()
            }
        );
    }

    #[test]
    fn scalars() {
        for (input, want) in [
            ("<value>plain</value>", value!("plain")),
            ("<value/>", value!("")),
            ("<value></value>", value!("")),
            ("<value><string/></value>", value!("")),
            ("<value><string>  padded  </string></value>", value!("  padded  ")),
            ("<value><i4>-12</i4></value>", value!(-12)),
            ("<value><int>7</int></value>", value!(7)),
            ("<value><i8>9223372036854775807</i8></value>", value!(i64::MAX)),
            ("<value><double>0.25</double></value>", value!(0.25)),
            ("<value><boolean>1</boolean></value>", value!(true)),
            ("<value><boolean>0</boolean></value>", value!(false)),
            ("<value><nil/></value>", Value::Null),
            ("<value><array><data/></array></value>", value!([])),
            ("<value><struct></struct></value>", value!({})),
        ] {
            assert_eq!(parse_value(input).unwrap(), want, "{input}");
        }
    }

    #[test]
    fn entities_and_cdata() {
        let got = parse_value("<value><string>a &amp; b &lt;c&gt; &#65;&#x42;</string></value>").unwrap();
        assert_eq!(got, value!("a & b <c> AB"));

        let got = parse_value("<value><![CDATA[<raw>]]></value>").unwrap();
        assert_eq!(got, value!("<raw>"));

        let err = parse_value("<value>&bogus;</value>").unwrap_err();
        assert!(matches!(err, Error::InvalidEntity(name) if name == "bogus"));
    }

    #[test]
    fn datetime() {
        let want = Utc.with_ymd_and_hms(2013, 2, 3, 4, 5, 6).unwrap();

        for input in [
            "20130203T04:05:06",
            "20130203T04:05:06Z",
            "20130203T06:05:06+0200",
            "2013-02-03T04:05:06Z",
        ] {
            let xml = format!("<value><dateTime.iso8601>{input}</dateTime.iso8601></value>");
            assert_eq!(parse_value(&xml).unwrap(), Value::DateTime(want), "{input}");
        }

        let err = parse_value("<value><dateTime.iso8601>yesterday</dateTime.iso8601></value>")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDateTime(_)));
    }

    #[test]
    fn base64() {
        let got = parse_value("<value><base64>aGVs\nbG8=</base64></value>").unwrap();
        assert_eq!(got, Value::Base64(Bytes::from_static(b"hello")));
    }

    #[test]
    fn nested_struct() {
        let xml = "<struct>\
            <member><name>uuid</name><value>u1</value></member>\
            <member><name>other_config</name><value><struct>\
                <member><name>k</name><value>v</value></member>\
            </struct></value></member>\
            <member><name>tags</name><value><array><data></data></array></value></member>\
        </struct>";

        assert_eq!(
            parse_value_content(xml).unwrap(),
            value!({
                "uuid": "u1",
                "other_config": {"k": "v"},
                "tags": [],
            })
        );
    }

    #[test]
    fn content_is_bare_text() {
        assert_eq!(
            parse_value_content("OpaqueRef:vm1").unwrap(),
            value!("OpaqueRef:vm1")
        );
    }

    #[test]
    fn malformed() {
        for input in [
            "<value><int>abc</int></value>",
            "<value><boolean>yes</boolean></value>",
            "<value><unknown>1</unknown></value>",
            "<value>text<string>mixed</string></value>",
            "<value><string>open</value>",
            "<value><array><value>1</value></array></value>",
            "<value>1</value><value>2</value>",
            "<value>",
        ] {
            assert!(parse_value(input).is_err(), "{input}");
        }
    }
}
