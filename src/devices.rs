use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
use std::net::Ipv4Addr;

// Capture pseudo-devices that do not correspond to a physical interface.
pub const EXCLUDED_DEVICES: [&str; 6] = [
    "any",
    "nflog",
    "nfqueue",
    "bluetooth-monitor",
    "dbus-system",
    "dbus-session",
];

pub struct Ipv4Record {
    pub address: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub broadcast: Option<Ipv4Addr>,
}

pub fn is_relevant_device(device_name: &str) -> bool {
    return !EXCLUDED_DEVICES.contains(&device_name);
}

pub fn ipv4_records(iface: &NetworkInterface) -> Vec<Ipv4Record> {
    return iface
        .ips
        .iter()
        .filter_map(|net| match net {
            IpNetwork::V4(net) => Some(Ipv4Record {
                address: net.ip(),
                netmask: net.mask(),
                broadcast: match iface.is_broadcast() {
                    true => Some(net.broadcast()),
                    false => None,
                },
            }),
            IpNetwork::V6(_) => None,
        })
        .collect();
}

#[cfg(test)]
pub const IFF_BROADCAST: u32 = 0x2;

#[cfg(test)]
pub fn fake_iface(
    name: &str,
    ips: Vec<IpNetwork>,
    flags: u32,
) -> NetworkInterface {
    NetworkInterface {
        name: name.to_string(),
        description: String::new(),
        index: 0,
        mac: None,
        ips,
        flags,
    }
}
