#![cfg(test)]

mod test_forwarding;
