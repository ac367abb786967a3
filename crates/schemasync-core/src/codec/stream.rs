use crate::{
    codec::{SchemaEntity, record_failure},
    error::CodecError,
    serialize::{classify_decode, classify_encode},
};
use serde::{Deserialize, Serialize};
use serde_cbor::{
    Deserializer, Serializer,
    de::IoRead,
    ser::IoWrite,
};
use std::io::{Read, Write};

///
/// SchemaWriter
///
/// Writes a sequence of entities onto one long-lived stream.
///

pub struct SchemaWriter<W: Write> {
    writer: W,
}

impl<W: Write> SchemaWriter<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write<T: SchemaEntity>(&mut self, entity: &T) -> Result<(), CodecError> {
        let mut serializer = Serializer::new(IoWrite::new(&mut self.writer));

        entity
            .serialize(&mut serializer)
            .map_err(|e| classify_encode(&e))
    }

    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.writer
            .flush()
            .map_err(|e| CodecError::Io(e.to_string()))
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

///
/// SchemaReader
///
/// Reads a sequence of entities from one long-lived stream. After a failed
/// read the stream position is undefined, so every later read fails too.
///

pub struct SchemaReader<R: Read> {
    de: Deserializer<IoRead<R>>,
    failed: bool,
}

impl<R: Read> SchemaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            de: Deserializer::from_reader(reader),
            failed: false,
        }
    }

    pub fn read<T: SchemaEntity>(&mut self) -> Result<T, CodecError> {
        self.ensure_usable()?;

        T::deserialize(&mut self.de)
            .map_err(|e| self.fail(&e))
    }

    /// Check that nothing but end-of-stream follows the last entity read.
    pub fn finish(mut self) -> Result<(), CodecError> {
        self.ensure_usable()?;

        self.de.end().map_err(|e| self.fail(&e))
    }

    fn ensure_usable(&self) -> Result<(), CodecError> {
        if self.failed {
            return Err(CodecError::StreamType(
                "schema reader used after a failed read".into(),
            ));
        }

        Ok(())
    }

    fn fail(&mut self, err: &serde_cbor::Error) -> CodecError {
        self.failed = true;

        let err = classify_decode(err);
        record_failure(&err);

        err
    }
}
