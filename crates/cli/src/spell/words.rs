// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project vocabulary accepted in addition to the system word list.

pub(crate) const EXTRA_WORDS: &[&str] = &[
    "ovs", "ovn", "vswitch", "vswitchd", "ovs-vswitchd", "netdev", "selinux", "ovs-ctl",
    "dpctl", "ofctl", "openvswitch", "dpdk", "hugepage", "hugepages", "pmd", "upcall", "vhost",
    "rx", "tx", "vhostuser", "openflow", "qsort", "rxq", "txq", "perf", "stats", "struct", "int",
    "char", "bool", "upcalls", "nicira", "bitmask", "ipv4", "ipv6", "tcp", "tcp4", "tcpv4",
    "udp", "udp4", "udpv4", "icmp", "icmp4", "icmpv6", "vlan", "vxlan", "cksum", "csum",
    "checksum", "ofproto", "numa", "mempool", "mempools", "mbuf", "mbufs", "hmap", "cmap",
    "smap", "dhcpv4", "dhcp", "dhcpv6", "opts", "metadata", "geneve", "mutex", "netdevs",
    "subtable", "virtio", "qos", "policer", "datapath", "tunctl", "attr", "ethernet", "ether",
    "defrag", "defragment", "loopback", "sflow", "acl", "initializer", "recirc", "xlated",
    "unclosed", "netlink", "msec", "usec", "nsec", "ms", "us", "ns", "kilobits", "kbps",
    "kilobytes", "megabytes", "mbps", "gigabytes", "gbps", "megabits", "gigabits", "pkts",
    "tuple", "miniflow", "megaflow", "conntrack", "vlans", "vxlans", "arg", "tpid", "xbundle",
    "xbundles", "mbundle", "mbundles", "netflow", "localnet", "odp", "pre", "dst", "dest", "src",
    "ethertype", "cvlan", "ips", "msg", "msgs", "liveness", "userspace", "eventmask",
    "datapaths", "slowpath", "fastpath", "multicast", "unicast", "revalidation", "namespace",
    "qdisc", "uuid", "ofport", "subnet", "revalidator", "revalidate", "l2", "l3", "l4",
    "openssl", "mtu", "ifindex", "enum", "enums", "http", "https", "num", "vconn", "vconns",
    "conn", "nat", "memset", "memcmp", "strcmp", "strcasecmp", "tc", "ufid", "api", "ofpbuf",
    "ofpbufs", "hashmaps", "hashmap", "deref", "dereference", "hw", "prio", "sendmmsg",
    "sendmsg", "malloc", "free", "alloc", "pid", "ppid", "pgid", "uid", "gid", "sid", "utime",
    "stime", "cutime", "cstime", "vsize", "rss", "rsslim", "whcan", "gtime", "eip", "rip",
    "cgtime", "dbg", "gw", "sbrec", "bfd", "sizeof", "pmds", "nic", "nics", "hwol", "encap",
    "decap", "tlv", "tlvs", "decapsulation", "fd", "cacheline", "xlate", "skiplist", "idl",
    "comparator", "natting", "alg", "pasv", "epasv", "wildcard", "nated", "amd64", "x86_64",
    "recirculation", "linux", "afxdp", "promisc", "goto", "misconfigured", "misconfiguration",
    "checkpatch", "debian", "travis", "cirrus", "appveyor", "faq", "erspan", "const", "hotplug",
    "addresssanitizer", "ovsdb", "dpif", "veth", "rhel", "jsonrpc", "json", "syscall", "lacp",
    "ipf", "skb", "valgrind", "northd", "sbdb", "nbdb", "lflow", "lflows", "lport", "lports",
];
