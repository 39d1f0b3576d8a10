fn main() {
    hanoi_towers::run();
}
