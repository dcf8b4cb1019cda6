use bitvec_logic::BitVec;

fn main() {
    let a = BitVec::from_slice(&[true, false, true, true]);
    let b = BitVec::from_slice(&[true, true, false, true]);

    println!("a       : {}", a);
    println!("b       : {}", b);
    println!("-----------");

    println!("a AND b : {}", a.and(&b).unwrap());
    println!("a OR  b : {}", a.or(&b).unwrap());
    println!("a XOR b : {}", a.xor(&b).unwrap());
    println!("NOT a   : {}", a.negate());
    println!("-----------");

    println!("a << 1  : {}", a.lshift(1));
    println!("a >> 1  : {}", a.rshift(1));
    println!("-----------");

    println!("support : {:?}", a.support().iter().collect::<Vec<u64>>());
}
