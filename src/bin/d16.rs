use lib::prelude::*;
use thiserror::Error;

#[entry(input = "d16.txt", expect = (879, 539051801941))]
fn solve(mut input: Input) -> Result<(u64, u64)> {
    let hex = input.line::<&[u8]>()?;
    Ok(decode(hex)?)
}

/// Decode the outermost packet, returning its version sum and value.
fn decode(hex: &[u8]) -> Result<(u64, u64), DecodeError> {
    let mut r = BitReader { data: hex, pos: 0 };
    let packet = r.packet()?;
    Ok((packet.versions, packet.value))
}

struct Packet {
    /// Sum of the version numbers in this packet and its sub-packets.
    versions: u64,
    value: u64,
}

struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl BitReader<'_> {
    /// Read the next `bits` bits as a big-endian number.
    fn take(&mut self, bits: usize) -> Result<u64, DecodeError> {
        let mut out = 0;

        for _ in 0..bits {
            let Some(&digit) = self.data.get(self.pos / 4) else {
                return Err(DecodeError::UnexpectedEnd(self.pos));
            };

            let nibble = match digit {
                b'0'..=b'9' => digit - b'0',
                b'A'..=b'F' => digit - b'A' + 10,
                _ => return Err(DecodeError::BadHexDigit(digit as char)),
            };

            let bit = (nibble >> (3 - self.pos % 4)) & 1;
            out = (out << 1) | u64::from(bit);
            self.pos += 1;
        }

        Ok(out)
    }

    fn packet(&mut self) -> Result<Packet, DecodeError> {
        let version = self.take(3)?;
        let type_id = self.take(3)?;

        if type_id == 4 {
            let mut value = 0u64;

            loop {
                let group = self.take(5)?;

                if value >> 60 != 0 {
                    return Err(DecodeError::Overflow);
                }

                value = (value << 4) | (group & 0xf);

                if group & 0x10 == 0 {
                    break;
                }
            }

            log::debug!("literal v{version} = {value}");

            return Ok(Packet {
                versions: version,
                value,
            });
        }

        let mut versions = version;
        let mut values = Vec::new();

        if self.take(1)? == 0 {
            let length = self.take(15)? as usize;
            let end = self.pos + length;

            while self.pos < end {
                let p = self.packet()?;
                versions += p.versions;
                values.push(p.value);
            }

            if self.pos != end {
                return Err(DecodeError::BadLength);
            }
        } else {
            let count = self.take(11)?;

            for _ in 0..count {
                let p = self.packet()?;
                versions += p.versions;
                values.push(p.value);
            }
        }

        let value = match type_id {
            0 => {
                let mut sum = 0u64;

                for &v in &values {
                    sum = sum.checked_add(v).ok_or(DecodeError::Overflow)?;
                }

                sum
            }
            1 => {
                let mut product = 1u64;

                for &v in &values {
                    product = product.checked_mul(v).ok_or(DecodeError::Overflow)?;
                }

                product
            }
            2 => values.iter().copied().min().ok_or(DecodeError::NoOperands)?,
            3 => values.iter().copied().max().ok_or(DecodeError::NoOperands)?,
            5 | 6 | 7 => {
                let &[a, b] = &values[..] else {
                    return Err(DecodeError::BadComparison(values.len()));
                };

                match type_id {
                    5 => u64::from(a > b),
                    6 => u64::from(a < b),
                    _ => u64::from(a == b),
                }
            }
            n => return Err(DecodeError::UnsupportedType(n)),
        };

        log::debug!("operator v{version} t{type_id} = {value}");

        Ok(Packet { versions, value })
    }
}

#[derive(Debug, Error)]
enum DecodeError {
    #[error("unexpected end of transmission at bit {0}")]
    UnexpectedEnd(usize),
    #[error("bad hex digit `{0}`")]
    BadHexDigit(char),
    #[error("sub-packets do not line up with the declared bit length")]
    BadLength,
    #[error("unsupported packet type {0}")]
    UnsupportedType(u64),
    #[error("value overflow")]
    Overflow,
    #[error("operator packet without operands")]
    NoOperands,
    #[error("comparison expects exactly two operands, got {0}")]
    BadComparison(usize),
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    #[test]
    fn version_sums() -> Result<()> {
        assert_eq!(super::decode(b"8A004A801A8002F478")?.0, 16);
        assert_eq!(super::decode(b"620080001611562C8802118E34")?.0, 12);
        assert_eq!(super::decode(b"C0015000016115A2E0802F182340")?.0, 23);
        assert_eq!(super::decode(b"A0016C880162017C3686B18A3D4780")?.0, 31);
        Ok(())
    }

    #[test]
    fn values() -> Result<()> {
        assert_eq!(super::decode(b"C200B40A82")?.1, 3);
        assert_eq!(super::decode(b"04005AC33890")?.1, 54);
        assert_eq!(super::decode(b"880086C3E88112")?.1, 7);
        assert_eq!(super::decode(b"CE00C43D881120")?.1, 9);
        assert_eq!(super::decode(b"D8005AC2A8F0")?.1, 1);
        assert_eq!(super::decode(b"F600BC2D8F")?.1, 0);
        assert_eq!(super::decode(b"9C005AC2F8F0")?.1, 0);
        assert_eq!(super::decode(b"9C0141080250320F1802104A08")?.1, 1);
        Ok(())
    }
}
