use crate::{
    convert::time_to_string,
    models::{
        context_tag_keys::{
            Tags, DEVICE_ID, DEVICE_LOCALE, DEVICE_OS_VERSION, DEVICE_TYPE, INTERNAL_SDK_VERSION,
        },
        Data, Envelope,
    },
    Error,
};
use std::{fmt, time::SystemTime};

/// Identity of the machine the telemetry is reported from.
///
/// The factory does not probe the host itself; callers pass these values in,
/// which keeps envelope construction a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct HostIdentity {
    /// Machine name, reported as the device id.
    pub machine_name: String,
    /// Device locale using <language>-<REGION> pattern, e.g. "en-US".
    pub locale: String,
    /// Operating system name and version descriptor.
    pub os_version: String,
}

/// Builds well-formed telemetry envelopes for one instrumentation key.
///
/// Stateless apart from the key and the fixed tag set derived from the host
/// identity; every build produces a fresh, immutable [`Envelope`].
#[derive(Clone)]
pub struct EnvelopeFactory {
    instrumentation_key: String,
    common_tags: Tags,
    sample_rate: f64,
}

impl EnvelopeFactory {
    /// Create a factory for the given instrumentation key.
    ///
    /// Fails with [`Error::InvalidInput`] when the key is empty. The key is
    /// embedded in every envelope and treated as a secret throughout: it
    /// never appears in log or `Debug` output.
    pub fn new(
        instrumentation_key: impl Into<String>,
        host: HostIdentity,
    ) -> Result<Self, Error> {
        let instrumentation_key = instrumentation_key.into();
        if instrumentation_key.is_empty() {
            return Err(Error::InvalidInput("instrumentation key must not be empty"));
        }

        let mut common_tags = Tags::new();
        common_tags.insert(DEVICE_ID, host.machine_name);
        common_tags.insert(DEVICE_LOCALE, host.locale);
        common_tags.insert(DEVICE_OS_VERSION, host.os_version);
        common_tags.insert(DEVICE_TYPE, "Other".into());
        common_tags.insert(
            INTERNAL_SDK_VERSION,
            concat!("rust-raw:", env!("CARGO_PKG_VERSION")).into(),
        );

        Ok(Self {
            instrumentation_key,
            common_tags,
            sample_rate: 100.0,
        })
    }

    /// Wrap a payload in an envelope stamped with the current UTC time.
    ///
    /// The envelope's type name is derived from the payload variant, so the
    /// `baseType` tag always matches the populated `baseData`.
    pub fn build_envelope(&self, data: Data) -> Envelope {
        self.build_envelope_at(data, SystemTime::now())
    }

    /// Wrap a payload in an envelope stamped with a caller-supplied time.
    pub fn build_envelope_at(&self, data: Data, time: SystemTime) -> Envelope {
        Envelope {
            ver: 1,
            name: data.envelope_name().into(),
            time: time_to_string(time),
            sample_rate: self.sample_rate,
            i_key: self.instrumentation_key.clone(),
            flags: 0,
            tags: self.common_tags.clone(),
            data,
        }
    }
}

// Hand-written so the instrumentation key never leaks through `{:?}`.
impl fmt::Debug for EnvelopeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopeFactory")
            .field("instrumentation_key", &"<redacted>")
            .field("common_tags", &self.common_tags)
            .field("sample_rate", &self.sample_rate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityData, ExceptionData, ExceptionDetails, RequestData, SeverityLevel};
    use test_case::test_case;

    fn host() -> HostIdentity {
        HostIdentity {
            machine_name: "MACHINE-01".into(),
            locale: "en-US".into(),
            os_version: "Linux 6.1".into(),
        }
    }

    fn factory() -> EnvelopeFactory {
        EnvelopeFactory::new("a-key", host()).unwrap()
    }

    #[test]
    fn empty_instrumentation_key_is_rejected() {
        let err = EnvelopeFactory::new("", host()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    fn request_data() -> Data {
        Data::Request(RequestData::new("GET /", 125, "200", true, "/"))
    }

    fn availability_data() -> Data {
        Data::Availability(AvailabilityData::new("locA", 125, true))
    }

    fn exception_data() -> Data {
        Data::Exception(ExceptionData::new(
            vec![ExceptionDetails::new("System.Exception", "boom", "stack")],
            SeverityLevel::Error,
            "sampleproblem",
        ))
    }

    #[test_case(request_data(), "Microsoft.ApplicationInsights.Request", "RequestData" ; "request")]
    #[test_case(availability_data(), "Microsoft.ApplicationInsights.Availability", "AvailabilityData" ; "availability")]
    #[test_case(exception_data(), "Microsoft.ApplicationInsights.Exception", "ExceptionData" ; "exception")]
    fn envelope_name_and_base_type_match_kind(
        data: Data,
        expected_name: &'static str,
        expected_base_type: &'static str,
    ) {
        let envelope = factory().build_envelope(data);
        assert_eq!(expected_name, envelope.name);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(expected_base_type, json["data"]["baseType"]);
    }

    #[test]
    fn envelope_carries_fixed_fields_and_tags() {
        let time = SystemTime::UNIX_EPOCH + std::time::Duration::from_millis(1_592_735_400_125);
        let envelope = factory().build_envelope_at(request_data(), time);
        assert_eq!(1, envelope.ver);
        assert_eq!("2020-06-21T10:30:00.125Z", envelope.time);
        assert_eq!(100.0, envelope.sample_rate);
        assert_eq!("a-key", envelope.i_key);
        assert_eq!(0, envelope.flags);
        assert_eq!(Some(&"MACHINE-01".to_string()), envelope.tags.get(&DEVICE_ID));
        assert_eq!(Some(&"en-US".to_string()), envelope.tags.get(&DEVICE_LOCALE));
        assert_eq!(
            Some(&"Linux 6.1".to_string()),
            envelope.tags.get(&DEVICE_OS_VERSION)
        );
        assert_eq!(Some(&"Other".to_string()), envelope.tags.get(&DEVICE_TYPE));
        assert!(envelope
            .tags
            .get(&INTERNAL_SDK_VERSION)
            .unwrap()
            .starts_with("rust-raw:"));
    }

    #[test]
    fn payload_constructors_stamp_fresh_ids() {
        let a = RequestData::new("GET /", 125, "200", true, "/");
        let b = RequestData::new("GET /", 125, "200", true, "/");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn factory_debug_redacts_key() {
        let debugged = format!("{:?}", factory());
        assert!(!debugged.contains("a-key"));
    }
}
