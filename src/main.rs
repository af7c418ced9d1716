use sensor_filler::error::AppResult;

fn main() -> AppResult<()> {
    sensor_filler::entry::run()
}
