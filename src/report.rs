use crate::{args, devices, route};
use pnet::datalink::{self, NetworkInterface};
use std::net::Ipv4Addr;

const SEPARATOR: &str = "=====================================";

pub fn main(_args: args::Arguments) -> Result<(), String> {
    let devs = datalink::interfaces();

    let gateway = route::default_gateway().map_err(|e| {
        format!("Unable to get the default gateway address: {}", e)
    })?;

    for dev in devs.iter().filter(|d| devices::is_relevant_device(&d.name)) {
        print!("{}", format_device(dev, gateway));
    }

    return Ok(());
}

pub fn format_device(dev: &NetworkInterface, gateway: Ipv4Addr) -> String {
    let records = devices::ipv4_records(dev);

    if records.is_empty() {
        return format!(
            "Device: {}\nNo valid IPv4 addresses found\n{}\n",
            dev.name, SEPARATOR
        );
    }

    let mut out = String::new();
    for record in records {
        out.push_str(&format!("Device: {}\n", dev.name));
        out.push_str(&format!("IP Address: {}\n", record.address));
        out.push_str(&format!("Netmask: {}\n", record.netmask));
        match record.broadcast {
            Some(broadcast) => {
                out.push_str(&format!("Broadcast Address: {}\n", broadcast))
            }
            None => out.push_str("Broadcast Address: Not available\n"),
        };
        out.push_str(&format!("Gateway: {}\n", gateway));
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    return out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{fake_iface, IFF_BROADCAST};

    fn gw() -> Ipv4Addr {
        return "10.254.1.1".parse().unwrap();
    }

    #[test]
    fn report_block_per_ipv4_record() {
        let iface = fake_iface(
            "eth0",
            vec![
                "192.168.1.10/24".parse().unwrap(),
                "10.0.0.5/8".parse().unwrap(),
            ],
            IFF_BROADCAST,
        );

        let out = format_device(&iface, gw());

        assert_eq!(2, out.matches("Device: eth0\n").count());
        assert_eq!(2, out.matches(SEPARATOR).count());
        assert!(out.contains("IP Address: 192.168.1.10\n"));
        assert!(out.contains("IP Address: 10.0.0.5\n"));
    }

    #[test]
    fn full_block_layout() {
        let iface = fake_iface(
            "eth0",
            vec!["192.168.1.10/24".parse().unwrap()],
            IFF_BROADCAST,
        );

        assert_eq!(
            "Device: eth0\n\
             IP Address: 192.168.1.10\n\
             Netmask: 255.255.255.0\n\
             Broadcast Address: 192.168.1.255\n\
             Gateway: 10.254.1.1\n\
             =====================================\n",
            format_device(&iface, gw())
        );
    }

    #[test]
    fn missing_broadcast_is_marked() {
        let iface =
            fake_iface("tun0", vec!["10.8.0.2/24".parse().unwrap()], 0);

        let out = format_device(&iface, gw());
        assert!(out.contains("Broadcast Address: Not available\n"));
    }

    #[test]
    fn device_without_ipv4_prints_short_block() {
        let iface = fake_iface(
            "eth1",
            vec!["fe80::1/64".parse().unwrap()],
            IFF_BROADCAST,
        );

        assert_eq!(
            "Device: eth1\n\
             No valid IPv4 addresses found\n\
             =====================================\n",
            format_device(&iface, gw())
        );
    }
}
