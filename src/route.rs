use log::debug;
use nom::bytes::complete::take_till1;
use nom::character::complete::{hex_digit1, space1};
use nom::combinator::map_res;
use nom::sequence::tuple;
use nom::IResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::Ipv4Addr;

pub const ROUTE_TABLE_PATH: &str = "/proc/net/route";

pub struct RouteEntry {
    pub iface: String,
    pub destination: u32,
    pub gateway: u32,
}

pub fn default_gateway() -> Result<Ipv4Addr, String> {
    let file = File::open(ROUTE_TABLE_PATH)
        .map_err(|e| format!("Unable to open {}: {}", ROUTE_TABLE_PATH, e))?;

    return read_default_gateway(BufReader::new(file));
}

fn read_default_gateway<R: BufRead>(table: R) -> Result<Ipv4Addr, String> {
    // The first line is the column header.
    for line in table.lines().skip(1) {
        let line = line
            .map_err(|e| format!("Unable to read the routing table: {}", e))?;

        let entry = match parse_route_entry(&line) {
            Some(entry) => entry,
            None => continue,
        };

        if entry.destination == 0 {
            let gateway = gateway_addr(entry.gateway);
            debug!("Default route via {} on {}", gateway, entry.iface);
            return Ok(gateway);
        }
    }

    return Err(format!("No default route found"));
}

// The kernel stores route addresses as little-endian hex.
fn gateway_addr(gateway: u32) -> Ipv4Addr {
    return Ipv4Addr::from(gateway.swap_bytes());
}

fn parse_route_entry(line: &str) -> Option<RouteEntry> {
    let result: IResult<&str, (&str, &str, u32, &str, u32)> = tuple((
        take_till1(|c: char| c.is_whitespace()),
        space1,
        hex_u32,
        space1,
        hex_u32,
    ))(line);

    let (_, (iface, _, destination, _, gateway)) = result.ok()?;

    return Some(RouteEntry {
        iface: iface.to_string(),
        destination,
        gateway,
    });
}

fn hex_u32(input: &str) -> IResult<&str, u32> {
    map_res(hex_digit1, |h: &str| u32::from_str_radix(h, 16))(input)
}
