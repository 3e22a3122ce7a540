use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

// Magic vars, the test server only listens here
pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const PORT_NUM: u16 = 12345;
pub const RECV_BUFFER_SIZE: usize = 1024;
pub const PERIOD: Duration = Duration::from_secs(1);

pub const HELLO: &[u8] = b"HELLO\0";
const REQUEST_PREFIX: &str = "REQUEST";

// REQUEST<count> plus one null byte
pub fn request(count: u64) -> Vec<u8> {
    let mut msg = format!("{}{}", REQUEST_PREFIX, count).into_bytes();
    msg.push(0);
    return msg;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_is_six_bytes() {
        assert_eq!(HELLO.len(), 6);
        assert_eq!(HELLO, &[b'H', b'E', b'L', b'L', b'O', 0]);
    }

    #[test]
    fn request_framing() {
        assert_eq!(request(0), b"REQUEST0\0".to_vec());
        assert_eq!(request(42), b"REQUEST42\0".to_vec());
        assert_eq!(request(u64::MAX), format!("REQUEST{}\0", u64::MAX).into_bytes());
    }

    #[test]
    fn request_has_exactly_one_null() {
        let msg = request(1234567);
        assert_eq!(msg.iter().filter(|b| **b == 0).count(), 1);
        assert_eq!(*msg.last().unwrap(), 0);
    }
}
